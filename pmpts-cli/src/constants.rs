/// App name used for the confy settings file.
pub const PMPTS_CLI: &str = "pmpts";
