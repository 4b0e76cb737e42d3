//! Integration test: drawing frames
//!
//! Renders the game into ratatui's TestBackend and into a counting renderer.

use lander::collision::Outcome;
use lander::config::LanderConfig;
use lander::input::InputSnapshot;
use lander::simulation::Simulation;
use lander::terrain::Terrain;
use lander::ui::draw_game;
use lander::ui::renderer::{DisplayList, Point, Renderer, ScreenRect};
use lander::ui::scene::draw_scene;
use ratatui::backend::TestBackend;
use ratatui::style::Color;
use ratatui::Terminal;

fn screen_text(sim: &Simulation, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let mut display = DisplayList::new();
    terminal
        .draw(|frame| draw_game(frame, sim, &mut display).unwrap())
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn landed_sim() -> Simulation {
    let config = LanderConfig {
        initial_vx: 0.0,
        initial_vy: 0.0,
        ..Default::default()
    };
    let terrain = Terrain::from_heights(vec![400.0; config.land_points()], 380, 120).unwrap();
    let mut sim = Simulation::new(config, terrain);
    while !sim.outcome().is_terminal() {
        let input = InputSnapshot {
            thrust: sim.lander().vy > 1.0,
            ..Default::default()
        };
        sim.tick(&input).unwrap();
    }
    sim
}

#[derive(Default)]
struct Counts {
    lines: usize,
    polygons: usize,
    rects: usize,
    texts: Vec<String>,
}

impl Renderer for Counts {
    fn draw_line(&mut self, _from: Point, _to: Point, _color: Color, _width: u16) {
        self.lines += 1;
    }

    fn draw_polygon(&mut self, _points: &[Point], _color: Color, _filled: bool) {
        self.polygons += 1;
    }

    fn draw_rect(&mut self, _rect: ScreenRect, _color: Color, _filled: bool) {
        self.rects += 1;
    }

    fn draw_text(&mut self, text: &str, _at: Point, _color: Color) {
        self.texts.push(text.to_string());
    }
}

#[test]
fn test_scene_through_custom_renderer() {
    let sim = Simulation::from_seed(LanderConfig::default(), 99).unwrap();
    let mut counts = Counts::default();
    draw_scene(&sim, &mut counts).unwrap();

    assert_eq!(counts.lines, 1200);
    assert_eq!(counts.polygons, 1);
    assert_eq!(counts.rects, 2);
    assert_eq!(counts.texts.len(), 4);
    assert!(counts.texts[3].starts_with("Fuel:"));
}

#[test]
fn test_running_frame_shows_status_and_controls() {
    let sim = Simulation::from_seed(LanderConfig::default(), 99).unwrap();
    let text = screen_text(&sim, 140, 45);
    assert!(text.contains("Lander"));
    assert!(text.contains("Descending"));
    assert!(text.contains("Thrust"));
    assert!(text.contains("Info"));
}

#[test]
fn test_landed_frame_shows_banner() {
    let sim = landed_sim();
    assert_eq!(sim.outcome(), Outcome::Landed);
    let text = screen_text(&sim, 140, 45);
    assert!(text.contains("Landed Safely!"));
    assert!(!text.contains("Descending"));
}
