mod command;
mod model;
mod objective;
mod util;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    command::run()
}
