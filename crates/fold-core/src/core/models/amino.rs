use phf::{Map, phf_map};

/// One entry of the standard amino-acid lookup table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AminoAcid {
    pub code: char,            // One-letter code (e.g., 'A')
    pub name: &'static str,    // Display name (e.g., "Alanine")
    pub hydropathy: f64,       // Kyte-Doolittle hydropathy; positive reads as hydrophobic
}

/// The twenty standard amino acids, ordered alphabetically by one-letter code.
pub static AMINO_ACIDS: [AminoAcid; 20] = [
    AminoAcid { code: 'A', name: "Alanine", hydropathy: 1.8 },
    AminoAcid { code: 'R', name: "Arginine", hydropathy: -4.5 },
    AminoAcid { code: 'N', name: "Asparagine", hydropathy: -3.5 },
    AminoAcid { code: 'D', name: "Aspartate", hydropathy: -3.5 },
    AminoAcid { code: 'C', name: "Cysteine", hydropathy: 2.5 },
    AminoAcid { code: 'Q', name: "Glutamine", hydropathy: -3.5 },
    AminoAcid { code: 'E', name: "Glutamate", hydropathy: -3.5 },
    AminoAcid { code: 'G', name: "Glycine", hydropathy: -0.4 },
    AminoAcid { code: 'H', name: "Histidine", hydropathy: -3.2 },
    AminoAcid { code: 'I', name: "Isoleucine", hydropathy: 4.5 },
    AminoAcid { code: 'L', name: "Leucine", hydropathy: 3.8 },
    AminoAcid { code: 'K', name: "Lysine", hydropathy: -3.9 },
    AminoAcid { code: 'M', name: "Methionine", hydropathy: 1.9 },
    AminoAcid { code: 'F', name: "Phenylalanine", hydropathy: 2.8 },
    AminoAcid { code: 'P', name: "Proline", hydropathy: -1.6 },
    AminoAcid { code: 'S', name: "Serine", hydropathy: -0.8 },
    AminoAcid { code: 'T', name: "Threonine", hydropathy: -0.7 },
    AminoAcid { code: 'W', name: "Tryptophan", hydropathy: -0.9 },
    AminoAcid { code: 'Y', name: "Tyrosine", hydropathy: -1.3 },
    AminoAcid { code: 'V', name: "Valine", hydropathy: 4.2 },
];

static CODE_INDEX: Map<char, usize> = phf_map! {
    'A' => 0, 'R' => 1, 'N' => 2, 'D' => 3, 'C' => 4,
    'Q' => 5, 'E' => 6, 'G' => 7, 'H' => 8, 'I' => 9,
    'L' => 10, 'K' => 11, 'M' => 12, 'F' => 13, 'P' => 14,
    'S' => 15, 'T' => 16, 'W' => 17, 'Y' => 18, 'V' => 19,
};

/// Looks up an amino acid by its (uppercase) one-letter code.
pub fn lookup(code: char) -> Option<&'static AminoAcid> {
    CODE_INDEX.get(&code).map(|&i| &AMINO_ACIDS[i])
}

pub fn is_known_code(code: char) -> bool {
    CODE_INDEX.contains_key(&code)
}
