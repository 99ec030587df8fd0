use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a vendor state code into a readable message
    Explain {
        /// Connector kind: "mysql", "pg", "mssql", …
        #[arg(long)]
        kind: String,

        #[arg(long, help = "Vendor state code, e.g. 28000")]
        state: String,

        #[arg(
            long,
            default_value = "",
            help = "Underlying error text, used when the state code is not recognized"
        )]
        cause: String,

        #[arg(long, help = "Print the diagnostic as JSON")]
        json: bool,
    },
}
