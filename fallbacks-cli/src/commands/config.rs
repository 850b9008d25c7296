use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use fallbacks_lib::Settings;
use fallbacks_lib::settings::{save_settings_to, settings_path};

use crate::CliError;

/// Show the settings file location and the effective values.
pub(crate) fn run_config_show(settings: &Settings) -> Result<(), CliError> {
    let path = settings_path();

    log::info!(
        "{}",
        "Fallbacks Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");
    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    let rendered = toml::to_string_pretty(settings)
        .map_err(|e| CliError::config(format!("could not render settings: {e}")))?;
    for line in rendered.lines() {
        log::info!("  {}", line);
    }
    if settings.catalog.path.is_none() {
        log::info!(
            "  {}",
            "# catalog.path unset: using the bundled catalog".if_supports_color(Stdout, |t| t.dimmed())
        );
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    println!("{}", settings_path().display());
}

/// Write the effective settings so they can be edited by hand.
pub(crate) fn run_config_init(settings: &Settings, force: bool) -> Result<(), CliError> {
    let path = settings_path();
    if path.exists() && !force {
        return Err(CliError::config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    save_settings_to(settings, &path)?;
    log::info!(
        "{} Wrote {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display(),
    );
    Ok(())
}
