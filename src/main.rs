//! Spritecam CLI - Run a headless camera-follow scene from JSON configuration.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use image::Rgba;

use spritecam::{
    animation::{AnimatedSprite, Clock, FixedStepClock},
    camera::Camera,
    schema::{LayerFormat, SceneConfig, TileLayerConfig},
    sprite::PhysicalSprite,
    surface::{Rect, Size, Surface},
    tilemap::{TileMap, Tilesheet, tmx_file_to_tilemaps},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <scene.json> [ticks]", args[0]);
        eprintln!();
        eprintln!("Move a sprite through a world and follow it with a camera.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  scene.json  Path to scene configuration file");
        eprintln!("  ticks       Number of ticks to run (default: 100)");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);
    let ticks: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100);

    // Load configuration
    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let config: SceneConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = config.validate() {
        eprintln!("Invalid config: {}", e);
        std::process::exit(1);
    }

    let mut camera = Camera::from_config(&config.camera).unwrap_or_else(|e| {
        eprintln!("Invalid camera config: {}", e);
        std::process::exit(1);
    });

    // World background: clear color with tile layers on top
    let world_size = config.camera.source_size;
    let mut background = Surface::filled(world_size, Rgba(config.background));
    let mut solid_blocks = Vec::new();
    if let Some(tiles) = &config.tiles {
        let (layers, solids) = load_tile_layers(tiles);
        background.blit(&layers, (0, 0));
        solid_blocks = solids;
    }

    let mut sprite = match &config.sprite {
        Some(path) => AnimatedSprite::from_resource(path).unwrap_or_else(|e| {
            eprintln!("Error loading sprite: {}", e);
            std::process::exit(1);
        }),
        None => default_sprite(),
    };

    println!("Spritecam Scene");
    println!("===============");
    println!(
        "World: {}x{}, focus: {}x{}, output: {}x{}",
        world_size.width,
        world_size.height,
        config.camera.focus_size.width,
        config.camera.focus_size.height,
        config.camera.output_size.width,
        config.camera.output_size.height
    );
    println!("Behavior: {:?}", config.camera.behavior);
    println!(
        "Sprite: {} frames, {} ms cycle",
        sprite.frames().len(),
        sprite.cycle_duration()
    );
    println!("Solid blocks: {}", solid_blocks.len());
    println!("Ticks: {} ({} ms each)", ticks, config.tick_ms);
    println!();

    let mut actor = PhysicalSprite::at(&mut sprite, config.start);
    let mut clock = FixedStepClock::new(config.tick_ms);
    let mut velocity = config.velocity;
    let mut camera_errors = 0u64;
    let mut solid_hits = 0u64;

    println!("Running scene...");
    let start = Instant::now();

    for i in 0..ticks {
        let Ok(()) = actor.update_state(clock.get_time());

        let mut rect = actor.rect();
        velocity = bounce(&mut rect, velocity, world_size);
        actor.set_position(rect.top_left());

        if solid_blocks.iter().any(|block| block.intersects(&actor.rect())) {
            solid_hits += 1;
        }

        camera.source_surface_mut().clone_from(&background);
        camera.blit(actor.image(), actor.position());

        if let Err(e) = camera.scroll_to(actor.rect()) {
            log::warn!("Tick {}: {}", i, e);
            camera_errors += 1;
        }

        // Print progress every 10%
        if (i + 1) % (ticks / 10).max(1) == 0 {
            let (x, y) = actor.position();
            let (ox, oy) = camera.offset();
            println!(
                "  Tick {}/{}: actor=({}, {}), offset=({}, {}), frame={}",
                i + 1,
                ticks,
                x,
                y,
                ox,
                oy,
                actor.sprite().current_index()
            );
        }
    }

    let elapsed = start.elapsed();

    println!();
    println!("Camera errors: {}", camera_errors);
    println!("Ticks touching solid blocks: {}", solid_hits);
    println!(
        "Time: {:.2}s ({:.1} ticks/s)",
        elapsed.as_secs_f32(),
        ticks as f32 / elapsed.as_secs_f32()
    );

    if let Some(output) = &config.output {
        if let Err(e) = camera.surface().save(output) {
            eprintln!("Error saving output: {}", e);
            std::process::exit(1);
        }
        println!("Saved {}", output.display());
    }
}

/// Render every configured layer onto one surface and collect solid blocks.
fn load_tile_layers(tiles: &TileLayerConfig) -> (Surface, Vec<Rect>) {
    let sheet = Tilesheet::from_file(
        &tiles.tilesheet,
        tiles.tile_size.width,
        tiles.tile_size.height,
    )
    .unwrap_or_else(|e| {
        eprintln!("Error loading tilesheet: {}", e);
        std::process::exit(1);
    });

    let mut rendered = Surface::new(Size::new(0, 0));
    let mut solids = Vec::new();

    for layer_path in &tiles.layers {
        let maps = match LayerFormat::from_path(layer_path) {
            LayerFormat::Tmx => tmx_file_to_tilemaps(layer_path, &sheet),
            LayerFormat::Csv => {
                let csv = fs::read_to_string(layer_path).unwrap_or_else(|e| {
                    eprintln!("Error reading layer {}: {}", layer_path.display(), e);
                    std::process::exit(1);
                });
                TileMap::from_csv(&csv, &sheet, tiles.firstgid).map(|map| vec![map])
            }
        }
        .unwrap_or_else(|e| {
            eprintln!("Error parsing layer {}: {}", layer_path.display(), e);
            std::process::exit(1);
        });

        for map in &maps {
            solids.extend(map.solid_blocks());
            let layer = map.to_surface();
            if !rendered.size().contains(layer.size()) {
                let mut grown = Surface::new(rendered.size().max(layer.size()));
                grown.blit(&rendered, (0, 0));
                rendered = grown;
            }
            rendered.blit(&layer, (0, 0));
        }
    }

    (rendered, solids)
}

/// Move `rect` by `velocity`, reflecting off the world edges. Returns the
/// velocity for the next tick.
fn bounce(rect: &mut Rect, velocity: (i32, i32), world: Size) -> (i32, i32) {
    let (mut vx, mut vy) = velocity;
    rect.move_by(vx, vy);

    let max_x = world.width.saturating_sub(rect.width).min(i32::MAX as u32) as i32;
    let max_y = world.height.saturating_sub(rect.height).min(i32::MAX as u32) as i32;
    if rect.x < 0 || rect.x > max_x {
        vx = -vx;
        rect.x = rect.x.clamp(0, max_x);
    }
    if rect.y < 0 || rect.y > max_y {
        vy = -vy;
        rect.y = rect.y.clamp(0, max_y);
    }
    (vx, vy)
}

/// Two-frame blinking square used when no sprite file is configured.
fn default_sprite() -> AnimatedSprite {
    let size = Size::new(16, 16);
    let frames = [
        (Surface::filled(size, Rgba([255, 64, 64, 255])), 250),
        (Surface::filled(size, Rgba([255, 200, 64, 255])), 250),
    ];
    AnimatedSprite::from_durations(frames).unwrap_or_else(|e| {
        eprintln!("Error building default sprite: {}", e);
        std::process::exit(1);
    })
}

fn print_example_config() {
    let config = SceneConfig::default();

    println!("Example configuration (scene.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing example config: {}", e),
    }
}
