//! ndcube - N-dimensional hypercube geometry driver
//!
//! Runs the animation clock against a geometry session and hands each new
//! bundle to the renderer slot. With no renderer attached the bundles are
//! summarised in the log, and the last one can be exported as RON.

use ndcube::config::AppConfig;
use ndcube::export::save_bundle;
use ndcube::systems::AnimationSystem;
use ndcube_core::{validate_dimension, GeometrySession, WireframeShape};

fn main() {
    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    // Initialize logging; RUST_LOG wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting ndcube");

    // The dimension comes from user-editable config, so validate it here
    let mut session = match validate_dimension(config.geometry.dimension)
        .and_then(|n| GeometrySession::new(n, config.geometry.theta))
    {
        Ok(session) => session,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let bundle = session.bundle();
    log::info!(
        "{}-cube: {} vertices, {} edges, {} basis rotations",
        bundle.dimension(),
        bundle.vertex_count(),
        bundle.edge_count(),
        bundle.rotation_matrices().len()
    );

    let mut animation = AnimationSystem::new(&config.animation);
    for _ in 0..config.animation.frames {
        let result = animation.update(&mut session);
        if let Some(bundle) = result.bundle {
            log::trace!(
                "frame {}: theta={:.4} dt={:.4}s",
                animation.frame(),
                bundle.theta(),
                result.dt
            );
        }
        animation.pace();
    }
    log::info!(
        "Ran {} frames, final theta {:.4}",
        animation.frame(),
        session.theta()
    );

    if let Some(path) = &config.export.path {
        match save_bundle(session.bundle(), path, config.export.pretty) {
            Ok(()) => log::info!("Exported bundle to {}", path),
            Err(e) => {
                log::error!("Failed to export bundle to {}: {}", path, e);
                std::process::exit(1);
            }
        }
    }
}
