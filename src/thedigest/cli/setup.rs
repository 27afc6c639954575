use clap::builder::{NonEmptyStringValueParser, PossibleValuesParser};
use clap::{Parser, Subcommand};
use thedigest::forms::subscribe::INTERESTS;

#[derive(Parser, Debug)]
#[command(
    name = "digest",
    bin_name = "digest",
    version,
    disable_help_subcommand = true
)]
#[command(about = "The Digest, a weekly newsletter, in your terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render any page of the site by path (e.g. /about, /archive/52)
    Page {
        path: String,

        /// Show the navigation menu opened
        #[arg(long)]
        menu: bool,
    },

    /// Browse the newsletter archive
    Archive {
        /// Only show issues matching this text
        #[arg(short, long)]
        search: Option<String>,

        /// Archive page, newest first
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Search past issues by title, excerpt or tag
    Search { query: String },

    /// Read a single issue
    Issue { id: u32 },

    /// Frequently asked questions
    Faq {
        /// Open or close an answer by its number (repeatable)
        #[arg(short = 't', long = "toggle", value_name = "NUMBER")]
        toggles: Vec<usize>,
    },

    /// Subscribe to the newsletter
    Subscribe {
        #[arg(long, value_parser = NonEmptyStringValueParser::new())]
        email: String,

        #[arg(long)]
        first_name: Option<String>,

        /// Topic of interest (repeatable)
        #[arg(
            long = "interest",
            value_name = "TOPIC",
            value_parser = PossibleValuesParser::new(INTERESTS.iter().copied())
        )]
        interests: Vec<String>,

        /// Agree to the Terms of Service and Privacy Policy
        #[arg(long)]
        agree_terms: bool,

        /// Opt out of occasional feature updates
        #[arg(long)]
        no_marketing: bool,
    },

    /// The one-field signup from the home page
    QuickSubscribe { email: Option<String> },

    /// Send us a message
    Contact {
        #[arg(long, value_parser = NonEmptyStringValueParser::new())]
        name: String,

        #[arg(long, value_parser = NonEmptyStringValueParser::new())]
        email: String,

        #[arg(long, value_parser = NonEmptyStringValueParser::new())]
        subject: String,

        #[arg(long, value_parser = NonEmptyStringValueParser::new())]
        message: String,
    },

    /// Sign in with a password or request a magic link
    #[command(name = "signin")]
    SignIn {
        #[arg(long, default_value = "")]
        email: String,

        #[arg(long)]
        password: Option<String>,

        /// Email a sign-in link instead of using a password
        #[arg(long, conflicts_with = "password")]
        magic_link: bool,

        #[arg(long)]
        remember_me: bool,

        /// Email a password reset link
        #[arg(long, conflicts_with_all = ["password", "magic_link"])]
        forgot_password: bool,
    },

    /// Show or change settings
    Config {
        key: Option<String>,
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn naked_invocation_has_no_command() {
        let cli = Cli::try_parse_from(["digest"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn faq_toggles_repeat() {
        let cli = Cli::try_parse_from(["digest", "faq", "-t", "2", "--toggle", "4"]).unwrap();
        match cli.command {
            Some(Commands::Faq { toggles }) => assert_eq!(toggles, vec![2, 4]),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn subscribe_rejects_unknown_interest() {
        let parsed = Cli::try_parse_from([
            "digest",
            "subscribe",
            "--email",
            "a@b.co",
            "--interest",
            "Gardening",
        ]);
        assert!(parsed.is_err());

        let parsed = Cli::try_parse_from([
            "digest",
            "subscribe",
            "--email",
            "a@b.co",
            "--interest",
            "Data & Analytics",
        ]);
        assert!(parsed.is_ok());
    }

    #[test]
    fn magic_link_and_password_conflict() {
        let parsed = Cli::try_parse_from([
            "digest",
            "signin",
            "--email",
            "a@b.co",
            "--password",
            "x",
            "--magic-link",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn contact_requires_every_field() {
        let parsed = Cli::try_parse_from(["digest", "contact", "--name", "Sam"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn contact_rejects_empty_fields() {
        let full = [
            "digest",
            "contact",
            "--name",
            "Sam",
            "--email",
            "sam@example.com",
            "--subject",
            "Hi",
            "--message",
            "Hello",
        ];
        assert!(Cli::try_parse_from(full).is_ok());

        for blank in [3, 5, 7, 9] {
            let mut args = full;
            args[blank] = "";
            assert!(Cli::try_parse_from(args).is_err(), "{} accepted empty", args[blank - 1]);
        }
    }

    #[test]
    fn subscribe_rejects_empty_email() {
        let parsed =
            Cli::try_parse_from(["digest", "subscribe", "--email", "", "--agree-terms"]);
        assert!(parsed.is_err());
    }
}
