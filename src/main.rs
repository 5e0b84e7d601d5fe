// src/main.rs
use log::{info, warn};
use nannou::event::{TouchEvent, TouchPhase};
use nannou::prelude::*;

use dotgrid::{
    config::Config,
    models::{window_to_grid, DotImage},
    render::AnimatedDot,
    views::{DotGrid, GridConfig, PointerEvent},
};

const SPACING_STEP: f32 = 8.0;

struct Model {
    // Core components:
    grid: DotGrid<AnimatedDot>,
    grid_config: GridConfig,

    // Style
    background: Rgba,

    // Pointer
    touch_id: Option<u64>,
}

fn main() {
    env_logger::init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");
    let mut grid_config = config.grid_config().expect("Invalid grid config");
    let background = config
        .background_color()
        .expect("Invalid background colour");

    // Create window
    let window_id = app
        .new_window()
        .title("dotgrid")
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_pressed(mouse_pressed)
        .mouse_moved(mouse_moved)
        .mouse_released(mouse_released)
        .touch(touch)
        .resized(resized)
        .build()
        .expect("Failed to build window");

    // Decode the dot image, if any
    if let Some(path) = config.resolve_image_path() {
        match wgpu::Texture::from_path(app, &path) {
            Ok(texture) => grid_config.style.image = Some(DotImage::new(texture)),
            Err(err) => warn!("could not load dot image {}: {}", path.display(), err),
        }
    }

    let size = app
        .window(window_id)
        .map(|window| window.rect().wh())
        .unwrap_or_else(|| vec2(config.window.width as f32, config.window.height as f32));
    let grid = DotGrid::with_bounds(grid_config.clone(), size.x, size.y);
    let (columns, rows) = grid.dimensions();
    info!("{}x{} dots in a {}x{} window", columns, rows, size.x, size.y);

    Model {
        grid,
        grid_config,
        background,
        touch_id: None,
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    model.grid.update(app.time);
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(model.background);
    model.grid.draw(&draw);
    draw.to_frame(app, &frame).unwrap();
}

// ******************************* Layout *******************************

fn resized(_app: &App, model: &mut Model, size: Vec2) {
    model.grid.set_bounds(size.x, size.y);
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        // cycle the alignment policy
        Key::A => {
            model.grid_config.alignment = model.grid_config.alignment.next();
            info!("alignment: {:?}", model.grid_config.alignment);
        }
        Key::Up => {
            model.grid_config.space_between_cells += SPACING_STEP;
            info!("spacing: {}", model.grid_config.space_between_cells);
        }
        Key::Down => {
            let spacing = model.grid_config.space_between_cells - SPACING_STEP;
            if spacing <= 0.0 {
                return;
            }
            model.grid_config.space_between_cells = spacing;
            info!("spacing: {}", spacing);
        }
        Key::R => {}
        _ => return,
    }
    model.grid.set_config(model.grid_config.clone());
}

// ******************************* Pointer *******************************

fn pointer_location(model: &Model, position: Point2) -> Point2 {
    let (width, height) = model.grid.bounds();
    window_to_grid(position, vec2(width, height))
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }
    let location = pointer_location(model, app.mouse.position());
    model.grid.handle_pointer(PointerEvent::Began(location));
}

fn mouse_moved(app: &App, model: &mut Model, position: Point2) {
    if !app.mouse.buttons.left().is_down() {
        return;
    }
    let location = pointer_location(model, position);
    model.grid.handle_pointer(PointerEvent::Moved(location));
}

fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.grid.handle_pointer(PointerEvent::Ended);
    }
}

// Only the first finger down drives the grid until it lifts.
fn touch(_app: &App, model: &mut Model, event: TouchEvent) {
    match model.touch_id {
        Some(id) if id != event.id => return,
        None if event.phase != TouchPhase::Started => return,
        _ => {}
    }

    let location = pointer_location(model, event.position);
    let pointer = match event.phase {
        TouchPhase::Started => {
            model.touch_id = Some(event.id);
            PointerEvent::Began(location)
        }
        TouchPhase::Moved => PointerEvent::Moved(location),
        TouchPhase::Ended => {
            model.touch_id = None;
            PointerEvent::Ended
        }
        TouchPhase::Cancelled => {
            model.touch_id = None;
            PointerEvent::Cancelled
        }
    };
    model.grid.handle_pointer(pointer);
}
