use crate::cli::InspectArgs;
use crate::error::Result;
use bioasm::core::ident::{Selector, StructureId};
use bioasm::engine::config::RetrievalConfig;
use tracing::{debug, info};

pub fn run(args: InspectArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            info!("Loading retrieval configuration from {}.", path.display());
            RetrievalConfig::load(path)?
        }
        None => RetrievalConfig::default(),
    };
    debug!(?config, "effective retrieval configuration");

    let id = StructureId::parse(&args.name)?;

    println!("identifier : {}", id);
    describe(&id);
    describe_source(&config);
    Ok(())
}

fn describe(id: &StructureId) {
    match id {
        StructureId::Entry { code } => {
            println!("kind       : whole entry (asymmetric unit, first model, ligands included)");
            println!("entry      : {}", code);
            println!("route      : structure cache");
        }
        StructureId::Selection { code, selectors } => {
            println!("kind       : chain/range sub-selection");
            println!("entry      : {}", code);
            for selector in selectors {
                match selector {
                    Selector::Chain { id } => println!("selector   : chain {}", id),
                    Selector::Range { chain, start, end } => println!(
                        "selector   : chain {}, residues {} to {} inclusive",
                        chain, start, end
                    ),
                }
            }
            println!("route      : structure cache, then selection extraction");
        }
        StructureId::ScopDomain { id } => {
            println!("kind       : SCOP domain");
            println!("entry      : {}", &id[1..5]);
            println!("route      : structure cache, resolved via the domain's chain");
        }
        StructureId::DomainPrediction { id } => {
            println!("kind       : PDP domain prediction");
            println!("entry      : {}", id[..4].to_ascii_lowercase());
            println!("route      : structure cache, resolved via the domain's chain");
        }
        StructureId::Assembly { code, index } => {
            println!("kind       : biological assembly");
            println!("entry      : {}", code);
            if *index == 0 {
                println!("assembly   : 0 (the asymmetric unit itself)");
            } else {
                println!("assembly   : {}", index);
            }
            println!("route      : assembly resolver, then reconstruction");
        }
        StructureId::Url { url } => {
            println!("kind       : opaque URL");
            println!("url        : {}", url);
            println!("route      : delegated whole to the retrieval backend");
        }
    }
}

fn describe_source(config: &RetrievalConfig) {
    let cache_dir = config
        .cache_dir
        .as_ref()
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| "<backend default>".to_string());
    println!(
        "source     : {} preferred, remote fetch {}, cache dir {}",
        config.preferred_filetype,
        if config.fetch_remote {
            "enabled"
        } else {
            "disabled"
        },
        cache_dir
    );
}
