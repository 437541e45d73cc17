use super::surface::{Color, DrawSurface, TextAnchor};
use crate::core::models::residue::Polarity;
use crate::engine::state::Simulation;
use nalgebra::Point2;

pub const BACKGROUND: Color = Color::rgb(0x0b, 0x0b, 0x0c);
pub const HYDROPHOBIC: Color = Color::rgb(0xff, 0x9f, 0x0a);
pub const POLAR: Color = Color::rgb(0x64, 0xd2, 0xff);
const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

const RESIDUE_RADIUS: f64 = 10.0;
const CORE_RING_FRACTION: f64 = 0.28;
const LABEL_SIZE: f64 = 10.0;
const TOOLTIP_SIZE: f64 = 12.0;
const LEGEND_SIZE: f64 = 13.0;
const LEGEND_TEXT: &str = "Orange = nonpolar (hydrophobic); Blue = polar (hydrophilic)";

fn polarity_color(polarity: Polarity) -> Color {
    match polarity {
        Polarity::Hydrophobic => HYDROPHOBIC,
        Polarity::Polar => POLAR,
    }
}

/// One full draw pass over the simulation: background, reference ring,
/// bonds, trails, register edges, residues with labels, hover tooltip, and
/// the legend line.
pub fn draw(sim: &Simulation, surface: &mut impl DrawSurface) {
    let chain = sim.chain();
    if chain.is_empty() {
        return;
    }
    surface.clear();
    surface.fill_rect(0.0, 0.0, sim.width(), sim.height(), BACKGROUND);

    if sim.display().core_ring {
        let radius = sim.width().min(sim.height()) * CORE_RING_FRACTION;
        surface.stroke_circle(
            Point2::new(sim.width() * 0.5, sim.height() * 0.5),
            radius,
            1.0,
            WHITE.with_alpha(0.1),
            Some([6.0, 8.0]),
        );
    }

    // The bond polyline runs through every residue in chain order.
    let backbone: Vec<Point2<f64>> = chain.residues().iter().map(|r| r.position).collect();
    surface.stroke_path(&backbone, 2.0, WHITE.with_alpha(0.2));

    if sim.display().trails {
        for residue in chain.residues() {
            let trail: Vec<Point2<f64>> = residue.trail().copied().collect();
            if trail.len() >= 2 {
                surface.stroke_path(&trail, 1.0, WHITE.with_alpha(0.12));
            }
        }
    }

    if sim.display().hydrogen_bonds {
        for (i, j) in sim.register_pairs() {
            let edge = [chain.residues()[i].position, chain.residues()[j].position];
            surface.stroke_path(&edge, 1.5, WHITE.with_alpha(0.25));
        }
    }

    for residue in chain.residues() {
        let fill = polarity_color(residue.polarity());
        surface.fill_circle(residue.position, RESIDUE_RADIUS, fill);
        surface.stroke_circle(
            residue.position,
            RESIDUE_RADIUS,
            2.0,
            fill.with_alpha(0.9),
            None,
        );
        surface.fill_text(
            &residue.code().to_string(),
            residue.position.x,
            residue.position.y,
            LABEL_SIZE,
            BACKGROUND,
            TextAnchor::Center,
        );
    }

    if let Some(index) = sim.hovered() {
        if let Some(residue) = chain.get(index) {
            let text = format!(
                "{} — {}  (hydropathy {:.1})",
                residue.code(),
                residue.name(),
                residue.hydropathy()
            );
            let box_width = surface.text_width(&text, TOOLTIP_SIZE) + 12.0;
            let x = (residue.position.x + 12.0)
                .max(8.0)
                .min(sim.width() - box_width - 8.0);
            let y = (residue.position.y - 20.0).max(20.0);
            surface.fill_rect(x, y - 14.0, box_width, 20.0, WHITE.with_alpha(0.9));
            surface.fill_text(&text, x + 6.0, y, TOOLTIP_SIZE, BACKGROUND, TextAnchor::Left);
        }
    }

    let legend_width = surface.text_width(LEGEND_TEXT, LEGEND_SIZE);
    surface.fill_text(
        LEGEND_TEXT,
        (sim.width() - legend_width - 12.0).max(12.0),
        22.0,
        LEGEND_SIZE,
        WHITE.with_alpha(0.82),
        TextAnchor::Left,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::{DisplayToggles, SimulationConfigBuilder};
    use crate::render::surface::{DrawCommand, RecordingSurface};

    fn simulation_with(display: DisplayToggles) -> Simulation {
        let mut sim = Simulation::new(
            SimulationConfigBuilder::new().seed(42).build().unwrap(),
        );
        sim.set_display(display);
        sim
    }

    fn surface_for(sim: &Simulation) -> RecordingSurface {
        RecordingSurface::new(sim.width(), sim.height())
    }

    #[test]
    fn draw_emits_one_disc_and_label_per_residue() {
        let sim = simulation_with(DisplayToggles::default());
        let mut surface = surface_for(&sim);
        draw(&sim, &mut surface);
        let discs = surface.count(|c| matches!(c, DrawCommand::FillCircle { .. }));
        assert_eq!(discs, sim.chain().len());
        // One label per residue plus the legend line.
        let texts = surface.count(|c| matches!(c, DrawCommand::FillText { .. }));
        assert_eq!(texts, sim.chain().len() + 1);
    }

    #[test]
    fn residue_discs_use_the_polarity_palette() {
        let sim = simulation_with(DisplayToggles::default());
        let mut surface = surface_for(&sim);
        draw(&sim, &mut surface);
        for command in &surface.commands {
            if let DrawCommand::FillCircle { color, .. } = command {
                assert!(*color == HYDROPHOBIC || *color == POLAR);
            }
        }
    }

    #[test]
    fn core_ring_is_drawn_only_when_toggled() {
        let sim = simulation_with(DisplayToggles::default());
        let mut surface = surface_for(&sim);
        draw(&sim, &mut surface);
        assert_eq!(
            surface.count(|c| matches!(c, DrawCommand::StrokeCircle { dash: Some(_), .. })),
            0,
        );

        let sim = simulation_with(DisplayToggles {
            core_ring: true,
            ..DisplayToggles::default()
        });
        let mut surface = surface_for(&sim);
        draw(&sim, &mut surface);
        assert_eq!(
            surface.count(|c| matches!(c, DrawCommand::StrokeCircle { dash: Some(_), .. })),
            1,
        );
    }

    #[test]
    fn register_edges_require_both_toggle_and_bias() {
        let mut sim = simulation_with(DisplayToggles {
            hydrogen_bonds: true,
            ..DisplayToggles::default()
        });
        sim.apply_preset(crate::engine::config::Preset::Helix);
        let mut surface = surface_for(&sim);
        draw(&sim, &mut surface);
        // Backbone polyline + 16 register edges.
        let paths = surface.count(|c| matches!(c, DrawCommand::StrokePath { .. }));
        assert_eq!(paths, 1 + 16);
    }

    #[test]
    fn tooltip_appears_for_the_hovered_residue() {
        let mut sim = simulation_with(DisplayToggles::default());
        let target = sim.chain().residues()[0].position;
        sim.pointer_move(target.x, target.y);
        assert!(sim.hovered().is_some());
        let mut surface = surface_for(&sim);
        draw(&sim, &mut surface);
        let tooltip = surface.commands.iter().any(|c| {
            matches!(c, DrawCommand::FillText { text, .. } if text.contains("hydropathy"))
        });
        assert!(tooltip);
        // The tooltip box adds a second filled rectangle after the background.
        assert_eq!(surface.count(|c| matches!(c, DrawCommand::FillRect { .. })), 2);
    }

    #[test]
    fn trails_are_drawn_once_recorded() {
        let mut sim = simulation_with(DisplayToggles {
            trails: true,
            ..DisplayToggles::default()
        });
        for _ in 0..5 {
            sim.frame(16.67);
        }
        let mut surface = surface_for(&sim);
        draw(&sim, &mut surface);
        // Backbone plus one trail polyline per residue.
        let paths = surface.count(|c| matches!(c, DrawCommand::StrokePath { .. }));
        assert_eq!(paths, 1 + sim.chain().len());
    }

    #[test]
    fn draw_starts_by_clearing_and_painting_the_background() {
        let sim = simulation_with(DisplayToggles::default());
        let mut surface = surface_for(&sim);
        draw(&sim, &mut surface);
        assert_eq!(surface.commands[0], DrawCommand::Clear);
        assert!(matches!(
            surface.commands[1],
            DrawCommand::FillRect { color, .. } if color == BACKGROUND,
        ));
    }
}
