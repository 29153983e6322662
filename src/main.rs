mod domain;
mod icons;
mod palette;
mod render;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    icons::generate_all(&icons::project_root())?;
    Ok(())
}
