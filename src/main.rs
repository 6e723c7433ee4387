use setup::SetupPrompt;

mod setup;

fn main() -> anyhow::Result<()> {
    SetupPrompt::new().run()
}
