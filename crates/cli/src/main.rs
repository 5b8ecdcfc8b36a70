use clap::{Parser, Subcommand};
use std::sync::Arc;
use utoipa::OpenApi;

use api_rest::ApiDoc;
use hdb_core::{CoreConfig, PatientService};

#[derive(Parser)]
#[command(name = "hdb")]
#[command(about = "Healthcare dashboard backend CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the patients the server starts with
    List {
        /// Print as JSON instead of one line per patient
        #[arg(long)]
        json: bool,
    },
    /// Print the OpenAPI document for the REST API
    Openapi,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List { json }) => {
            let service = PatientService::new(Arc::new(CoreConfig::default()));
            let patients = service.list_patients()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&patients)?);
            } else if patients.is_empty() {
                println!("No patients found.");
            } else {
                for patient in patients {
                    println!(
                        "ID: {}, Name: {}, Age: {}, Condition: {}",
                        patient.id, patient.name, patient.age, patient.condition
                    );
                }
            }
        }
        Some(Commands::Openapi) => {
            println!("{}", ApiDoc::openapi().to_pretty_json()?);
        }
        None => {
            println!("Use 'hdb --help' for commands");
        }
    }

    Ok(())
}
