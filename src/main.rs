use pwa_icons::config::read_config;
use pwa_icons::logger::{log_error, log_line};
use pwa_icons::{generator, manifest, IconError};

fn main() {
    std::process::exit(match run() {
        Ok(()) => 0,
        Err(e) => {
            match &e {
                IconError::MissingSource(_) => println!("Error: {}", e),
                IconError::Processing(_) => println!("Error processing image: {}", e),
            }
            log_error("icon generation failed", &e);
            1
        }
    })
}

fn run() -> Result<(), IconError> {
    let cfg = match read_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            log_error("reading config, using defaults", &e);
            Default::default()
        }
    };
    log_line(&format!(
        "RUN: source={} dest={}",
        cfg.source_path.display(),
        cfg.dest_dir.display()
    ));

    let icons = generator::run(&cfg.source_path, &cfg.dest_dir, |icon| {
        println!("Saved {}", icon.file_name());
        log_line(&format!("Saved {}", icon.path.display()));
    })?;

    if cfg.print_manifest {
        println!("{}", manifest::to_json(&manifest::manifest_icons(&icons, &cfg.manifest_prefix)));
    }
    Ok(())
}
