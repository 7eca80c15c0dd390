use crate::listing::NoticeService;
use clap::Args;
use gz_core::{Error, GazetteConfig, NoticeListing, ParsedNotices, Result};
use std::time::Duration;

/// Where and how to reach the notices API.
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Notices JSON endpoint
    #[arg(long, global = true, default_value = gz_core::config::DEFAULT_BASE_URL)]
    pub base_url: String,
    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout: u64,
    /// Validate the endpoint's TLS certificate (skipped by default)
    #[arg(long, global = true)]
    pub verify_tls: bool,
}

impl ConnectionArgs {
    pub fn to_config(&self) -> GazetteConfig {
        GazetteConfig::new()
            .with_base_url(self.base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout))
            .with_tls_verification(self.verify_tls)
    }
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Page to show, starting at 0
    #[arg(long, default_value_t = 0)]
    pub page: u32,
    /// Print the listing as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn handle_command(args: ListArgs, service: &NoticeService) -> Result<()> {
    let listing = service.list_notices(args.page).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&listing.to_json())?);
    }

    match listing {
        NoticeListing::Available(parsed) => {
            if !args.json {
                print!("{}", render_listing(&parsed));
            }
            Ok(())
        }
        NoticeListing::Unavailable => {
            if !args.json {
                eprintln!("{}", NoticeListing::UNAVAILABLE_MESSAGE);
            }
            Err(Error::External(anyhow::anyhow!(
                NoticeListing::UNAVAILABLE_MESSAGE
            )))
        }
    }
}

pub fn render_listing(parsed: &ParsedNotices) -> String {
    let pagination = &parsed.pagination;
    let mut out = format!(
        "📰 Page {} of {} ({} notices)\n",
        pagination.current_page(),
        pagination.total_pages(),
        pagination.total_results()
    );

    if parsed.notices.is_empty() {
        out.push_str("No notices found.\n");
        return out;
    }

    for notice in &parsed.notices {
        out.push('\n');
        if notice.published.is_empty() {
            out.push_str(&format!("{}\n", notice.title));
        } else {
            out.push_str(&format!("{} - {}\n", notice.published, notice.title));
        }
        out.push_str(&format!("  {}\n", notice.url));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use gz_core::{NoticeRecord, PaginationInfo};

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        connection: ConnectionArgs,
        #[command(flatten)]
        list: ListArgs,
    }

    #[test]
    fn test_connection_defaults() {
        let cli = TestCli::parse_from(["gazette"]);
        let config = cli.connection.to_config();
        assert_eq!(config.base_url, gz_core::config::DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.accept_invalid_certs);
        assert_eq!(cli.list.page, 0);
        assert!(!cli.list.json);
    }

    #[test]
    fn test_connection_flags() {
        let cli = TestCli::parse_from([
            "gazette",
            "--base-url",
            "http://localhost:9000/data.json",
            "--timeout",
            "5",
            "--verify-tls",
            "--page",
            "2",
            "--json",
        ]);
        let config = cli.connection.to_config();
        assert_eq!(config.base_url, "http://localhost:9000/data.json");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(!config.accept_invalid_certs);
        assert_eq!(cli.list.page, 2);
        assert!(cli.list.json);
    }

    #[test]
    fn test_render_listing() {
        let parsed = ParsedNotices {
            notices: vec![
                NoticeRecord {
                    id: "n1".to_string(),
                    title: "Partnership Notice".to_string(),
                    content: "<p>Body</p>".to_string(),
                    published: "3 June 2024".to_string(),
                    url: "https://www.thegazette.co.uk/notice/1".to_string(),
                },
                NoticeRecord::default(),
            ],
            pagination: PaginationInfo::new(1, 12, 10),
        };

        let out = render_listing(&parsed);
        assert!(out.starts_with("📰 Page 1 of 2 (12 notices)\n"));
        assert!(out.contains("3 June 2024 - Partnership Notice\n  https://www.thegazette.co.uk/notice/1\n"));
        assert!(out.contains("\nUntitled\n  #\n"));
    }

    #[test]
    fn test_render_empty_listing() {
        let out = render_listing(&ParsedNotices::default());
        assert!(out.ends_with("No notices found.\n"));
    }
}
