use clap::{Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text report, as offered for download
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate hooks, captions, hashtags, CTAs and a posting plan for a topic
    Generate {
        topic: String,

        /// instagram, youtube or tiktok
        #[arg(short, long, default_value = "instagram")]
        platform: String,

        /// viral, funny, educational, luxury or motivational
        #[arg(short, long, default_value = "viral")]
        tone: String,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List previous generations, newest first
    History {
        #[arg(short, long)]
        limit: Option<usize>,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show one stored generation in full
    Show {
        id: String,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Remove a generation from history
    Delete { id: String },

    /// Start the HTTP server exposing POST /generate-content
    Serve {
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },
}
