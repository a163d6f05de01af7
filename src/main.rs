use clap::Parser;
use std::str::FromStr;
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use zdom::{error::Result, utils::write_file, Document, Node, PrintConfig, Printer};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Root element name
    #[arg(short, long)]
    root: String,

    /// Root attribute as key=value (repeatable)
    #[arg(short, long = "attr", value_parser = parse_attribute)]
    attributes: Vec<(String, String)>,

    /// Child node as kind:payload, kind one of element/text/comment/cdata/entity/pi (repeatable)
    #[arg(short, long = "node")]
    nodes: Vec<NodeSpec>,

    /// Normalize text content before printing
    #[arg(long)]
    normalize: bool,

    /// Report the number of element nodes
    #[arg(long)]
    count: bool,

    /// Prefix output with an XML declaration
    #[arg(long)]
    declaration: bool,

    /// Write attributes sorted by key
    #[arg(long)]
    sort_attributes: bool,

    /// Output file path
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(Clone, Debug)]
enum NodeSpec {
    Element(String),
    Text(String),
    Comment(String),
    CData(String),
    Entity(String),
    Pi { target: String, data: String },
}

impl FromStr for NodeSpec {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (kind, payload) = s
            .split_once(':')
            .ok_or_else(|| format!("expected kind:payload, got {:?}", s))?;
        let payload = payload.to_string();
        match kind {
            "element" => Ok(Self::Element(payload)),
            "text" => Ok(Self::Text(payload)),
            "comment" => Ok(Self::Comment(payload)),
            "cdata" => Ok(Self::CData(payload)),
            "entity" => Ok(Self::Entity(payload)),
            "pi" => {
                let (target, data) = payload.split_once(' ').unwrap_or((payload.as_str(), ""));
                Ok(Self::Pi {
                    target: target.to_string(),
                    data: data.to_string(),
                })
            }
            other => Err(format!("unknown node kind {:?}", other)),
        }
    }
}

impl NodeSpec {
    fn into_node(self) -> Result<Node> {
        match self {
            Self::Element(name) => Node::element(name),
            Self::Text(text) => Ok(Node::text(text)),
            Self::Comment(text) => Ok(Node::comment(text)),
            Self::CData(text) => Ok(Node::cdata(text)),
            Self::Entity(name) => Node::entity_reference(name),
            Self::Pi { target, data } => Node::processing_instruction(target, data),
        }
    }
}

fn parse_attribute(s: &str) -> std::result::Result<(String, String), String> {
    s.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got {:?}", s))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    info!("Building document rooted at: {}", args.root);
    let mut document = Document::new(&args.root)?;
    for (key, value) in args.attributes {
        document.root_mut().set_attribute(key, value)?;
    }
    for spec in args.nodes {
        let node = spec.into_node()?;
        document.root_mut().append_child(node);
    }

    if args.normalize {
        let stats = document.normalize();
        info!(
            "Normalized: {} text nodes merged, {} removed",
            stats.merged, stats.removed
        );
    }

    let printer = Printer::new(PrintConfig {
        xml_declaration: args.declaration,
        sort_attributes: args.sort_attributes,
    });
    let output = printer.print(&document)?;

    if let Some(output_path) = args.output {
        write_file(&output_path, &output)?;
        info!("Wrote {}", output_path);
    } else {
        println!("{}", output);
    }

    // Reported on stdout even with --output, so the file stays pure XML.
    if args.count {
        let count = document.element_node_count();
        info!("Element nodes: {}", count);
        println!("elements: {}", count);
    }

    Ok(())
}
