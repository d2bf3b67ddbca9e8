#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use sample_direct3d11_triangles::logging::init_tracing;
use sample_direct3d11_triangles::windy_error::MyResult;
use tracing::info;

#[cfg(windows)]
pub fn main() -> MyResult<()> {
    use sample_direct3d11_triangles::message_box::show_error_dialog;
    use sample_direct3d11_triangles::windy_error::last_os_error_code;
    use sample_direct3d11_triangles::run_sample::run_sample;
    use sample_direct3d11_triangles::sample_config::SampleConfig;
    use tracing::error;

    color_eyre::install()?;
    init_tracing();
    info!("Ahoy, triangles!");

    let config = SampleConfig::default();
    match run_sample(&config) {
        Ok(exit_code) => {
            info!("Exiting with code {exit_code}");
            std::process::exit(exit_code);
        }
        Err(report) => {
            let exit_code = report.exit_code().unwrap_or_else(last_os_error_code);
            error!("{report:?}");
            if let Some(init_error) = report.init_error() {
                show_error_dialog(init_error.caption(), init_error.dialog_text());
            }
            std::process::exit(exit_code);
        }
    }
}

#[cfg(not(windows))]
pub fn main() -> MyResult<()> {
    color_eyre::install()?;
    init_tracing();
    info!("Ahoy, triangles!");
    Err(eyre::eyre!("this sample renders with Direct3D 11 and only runs on Windows").into())
}
