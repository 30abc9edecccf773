use argsgen_profiles::Profile;

fn main() -> anyhow::Result<()> {
    argsgen_cli::report::run_standalone(Profile::Fast)
}
