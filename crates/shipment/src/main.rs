use std::process::ExitCode;

use clap::Parser;

use dhlship_products::{ProductEntry, all_products, find_product};
use dhlship_shipment::{API_VERSION, SdkConfig, WSDL_URL};

#[derive(Parser, Debug)]
#[command(name = "dhlship-catalog")]
#[command(about = "List carrier products with their size, weight and service limits")]
struct Args {
    /// Print as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Print the configured endpoint and API version instead of products
    #[arg(long, conflicts_with_all = ["json", "code"])]
    info: bool,

    /// Carrier product code, e.g. V01PAK
    code: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    dhlship_observability::init();

    let config = match SdkConfig::from_env() {
        Ok(config) => {
            tracing::debug!(endpoint = config.endpoint_url(), "configuration loaded");
            config
        }
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    if args.info {
        println!("{}", render_info(&config));
        return ExitCode::SUCCESS;
    }

    let output = match args.code {
        Some(code) => {
            let Some(entry) = find_product(&code) else {
                tracing::warn!(%code, "unknown product code");
                eprintln!("unknown product code: {code}");
                return ExitCode::from(2);
            };
            if args.json {
                serde_json::to_string_pretty(entry)
            } else {
                Ok(render_details(entry))
            }
        }
        None if args.json => serde_json::to_string_pretty(all_products()),
        None => Ok(all_products()
            .iter()
            .map(render_line)
            .collect::<Vec<_>>()
            .join("\n")),
    };

    match output {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize catalog");
            ExitCode::FAILURE
        }
    }
}

fn render_info(config: &SdkConfig) -> String {
    format!(
        "endpoint    {}\nwsdl        {}\napi version {}",
        config.endpoint_url(),
        WSDL_URL,
        API_VERSION
    )
}

fn render_line(entry: &ProductEntry) -> String {
    format!(
        "{:<10} {:<24} L {} W {} H {} cm, max {} kg{}",
        entry.product_type().code(),
        entry.display_name(),
        entry.length(),
        entry.width(),
        entry.height(),
        entry.max_weight(),
        if entry.is_austrian_product() { " [AT]" } else { "" }
    )
}

fn render_details(entry: &ProductEntry) -> String {
    let mut out = render_line(entry);
    out.push_str("\nservices:");
    for service in entry.allowed_services() {
        out.push_str(&format!("\n  {:<40} {}", service.identifier(), service.display_name()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;
    use dhlship_products::{ProductType, get_product};
    use dhlship_shipment::Environment;

    #[test]
    fn command_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn accepts_code_and_json_flag() {
        let args = Args::try_parse_from(["dhlship-catalog", "--json", "V01PAK"]).unwrap();
        assert!(args.json);
        assert!(!args.info);
        assert_eq!(args.code.as_deref(), Some("V01PAK"));
    }

    #[test]
    fn mistyped_flags_are_rejected_not_taken_as_codes() {
        for flag in ["--jsn", "-x"] {
            let err = Args::try_parse_from(["dhlship-catalog", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnknownArgument, "{flag}");
        }
    }

    #[test]
    fn second_code_is_rejected() {
        let err = Args::try_parse_from(["dhlship-catalog", "V01PAK", "V53WPAK"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn info_conflicts_with_listing_options() {
        let err = Args::try_parse_from(["dhlship-catalog", "--info", "--json"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn info_shows_endpoint_wsdl_and_version() {
        let config = SdkConfig {
            environment: Environment::Sandbox,
        };
        let text = render_info(&config);
        assert_eq!(
            text.lines().collect::<Vec<_>>(),
            vec![
                "endpoint    https://cig.dhl.de/services/sandbox/soap".to_string(),
                format!("wsdl        {WSDL_URL}"),
                "api version 1.0".to_string(),
            ]
        );
    }

    #[test]
    fn line_marks_austrian_products() {
        let line = render_line(get_product(ProductType::AustriaPackage).unwrap());
        assert!(line.starts_with("V86PARCEL"));
        assert!(line.contains("DHL Paket Austria"));
        assert!(line.contains("L 15-120 W 11-60 H 1-60 cm, max 31.5 kg"));
        assert!(line.ends_with("[AT]"));

        let national = render_line(get_product(ProductType::NationalPackage).unwrap());
        assert!(!national.ends_with("[AT]"));
    }

    #[test]
    fn details_list_service_labels() {
        let text = render_details(get_product(ProductType::EuropaPackage).unwrap());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "services:");
        assert!(lines[2].trim_start().starts_with("goGreen"));
        assert!(lines[3].ends_with("Transportversicherung"));
    }
}
