use super::*;

#[derive(Parser)]
#[command(author, version, about = "Console for a yum package-repository server")]
pub(super) struct Cli {
    #[arg(long, global = true, help = "Server base URL (overrides the config file)")]
    pub(super) server: Option<String>,
    #[arg(long, global = true, help = "Path to the config file")]
    pub(super) config: Option<PathBuf>,
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(clap::Subcommand)]
pub(super) enum Commands {
    #[command(about = "Manage config")]
    Config(ConfigArgs),
    #[command(about = "List static repositories")]
    Repos,
    #[command(about = "Manage virtual repository targets")]
    Virtual(VirtualArgs),
    #[command(about = "Adjust static repository settings")]
    Repo(RepoArgs),
    #[command(about = "Manage repository tags")]
    Tag(TagArgs),
    #[command(about = "Delete or propagate RPM artifacts")]
    Rpm(RpmArgs),
    #[command(about = "Launch terminal UI")]
    Tui(TuiArgs),
}

#[derive(Parser)]
pub(super) struct ConfigArgs {
    #[command(subcommand)]
    pub(super) command: ConfigCommands,
}

#[derive(clap::Subcommand)]
pub(super) enum ConfigCommands {
    #[command(about = "Initialize config with the server base URL")]
    Init(InitArgs),
}

#[derive(Parser)]
pub(super) struct InitArgs {
    #[arg(long)]
    pub(super) server: String,
}

#[derive(Parser)]
pub(super) struct VirtualArgs {
    #[command(subcommand)]
    pub(super) command: VirtualCommands,
}

#[derive(clap::Subcommand)]
pub(super) enum VirtualCommands {
    #[command(about = "Save where a virtual repository redirects to")]
    Set(SetVirtualArgs),
    #[command(about = "Show the target selector a saved target would resolve to")]
    Options(VirtualOptionsArgs),
}

#[derive(Parser)]
pub(super) struct SetVirtualArgs {
    #[arg(long)]
    pub(super) name: String,
    #[arg(long, conflicts_with = "url", help = "Internal static repository target")]
    pub(super) repo: Option<String>,
    #[arg(long, help = "External URL target")]
    pub(super) url: Option<String>,
}

#[derive(Parser)]
pub(super) struct VirtualOptionsArgs {
    #[arg(long)]
    pub(super) name: String,
    #[arg(long, help = "Previously saved target (a static repo name)")]
    pub(super) current: String,
}

#[derive(Parser)]
pub(super) struct RepoArgs {
    #[command(subcommand)]
    pub(super) command: RepoCommands,
}

#[derive(clap::Subcommand)]
pub(super) enum RepoCommands {
    #[command(about = "Switch a repository between scheduled and static metadata generation")]
    SetType(SetTypeArgs),
    #[command(about = "Set RPM retention limits")]
    Retention(RetentionArgs),
    #[command(about = "Set a raw repository property")]
    SetProperty(SetPropertyArgs),
}

#[derive(Parser)]
pub(super) struct SetTypeArgs {
    #[arg(long)]
    pub(super) name: String,
    #[arg(long = "type", value_enum)]
    pub(super) repo_type: RepoTypeValue,
}

#[derive(Parser)]
pub(super) struct RetentionArgs {
    #[arg(long)]
    pub(super) name: String,
    #[arg(long, help = "RPM versions to keep per package; 0 keeps all")]
    pub(super) max_keep: Option<u32>,
    #[arg(long, help = "Days before RPMs expire; 0 never expires")]
    pub(super) max_days: Option<u32>,
}

#[derive(Parser)]
pub(super) struct SetPropertyArgs {
    #[arg(long)]
    pub(super) name: String,
    #[arg(long)]
    pub(super) property: String,
    #[arg(long, help = "JSON value; bare words are sent as strings")]
    pub(super) value: String,
}

#[derive(Parser)]
pub(super) struct TagArgs {
    #[command(subcommand)]
    pub(super) command: TagCommands,
}

#[derive(clap::Subcommand)]
pub(super) enum TagCommands {
    #[command(about = "Add a tag to a repository")]
    Add(AddTagArgs),
    #[command(about = "Replace all tags of a repository")]
    Reset(ResetTagArgs),
}

#[derive(Parser)]
pub(super) struct AddTagArgs {
    #[arg(long)]
    pub(super) repo: String,
    #[arg(long)]
    pub(super) tag: String,
}

#[derive(Parser)]
pub(super) struct ResetTagArgs {
    #[arg(long)]
    pub(super) repo: String,
    #[arg(long = "tag")]
    pub(super) tags: Vec<String>,
}

#[derive(Parser)]
pub(super) struct RpmArgs {
    #[command(subcommand)]
    pub(super) command: RpmCommands,
}

#[derive(clap::Subcommand)]
pub(super) enum RpmCommands {
    #[command(about = "Delete one RPM artifact")]
    Delete(DeleteRpmArgs),
    #[command(about = "Trigger asynchronous deletion of obsolete RPMs")]
    CleanObsolete(CleanObsoleteArgs),
    #[command(about = "Propagate an RPM into another repository")]
    Propagate(PropagateArgs),
}

#[derive(Parser)]
pub(super) struct DeleteRpmArgs {
    #[arg(long)]
    pub(super) repo_path: String,
    #[arg(long)]
    pub(super) href: String,
}

#[derive(Parser)]
pub(super) struct CleanObsoleteArgs {
    #[arg(long)]
    pub(super) target: String,
    #[arg(long)]
    pub(super) source: String,
}

#[derive(Parser)]
pub(super) struct PropagateArgs {
    #[arg(long, help = "Source artifact path, e.g. repo/noarch/tool-1.0.rpm")]
    pub(super) source: String,
    #[arg(long, help = "Destination repository name")]
    pub(super) destination: String,
}

#[derive(Parser)]
pub(super) struct TuiArgs {
    #[arg(long, help = "Open the target editor for this virtual repository")]
    pub(super) virtual_repo: Option<String>,
    #[arg(long, help = "Previously saved target of the virtual repository")]
    pub(super) current: Option<String>,
    #[arg(long, help = "Treat the saved target as an external URL")]
    pub(super) external: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub(super) enum RepoTypeValue {
    Scheduled,
    Static,
}

impl From<RepoTypeValue> for RepoType {
    fn from(value: RepoTypeValue) -> Self {
        match value {
            RepoTypeValue::Scheduled => RepoType::Scheduled,
            RepoTypeValue::Static => RepoType::Static,
        }
    }
}
