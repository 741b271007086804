//! Circuit Schematic Editor CLI.
//!
//! Kommandozeilen-Treiber für die Editier-Engine und den LaTeX-Export-Dienst.

use anyhow::Context;
use circuit_schematic_editor::{
    AppController, AppIntent, AppState, ComponentKind, Diagram, EditorOptions, ExportClient,
    ExportOptions, NewComponent, Port, PortSide,
};
use clap::{Parser, Subcommand};
use glam::Vec2;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "circuit-schematic-editor", version, about)]
struct Cli {
    /// Basis-URL des Export-Dienstes (überschreibt die Konfiguration)
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Gesundheitszustand des Export-Dienstes abfragen
    Health,
    /// Vom Export-Dienst unterstützte Bauteile auflisten
    Components,
    /// Diagramm-JSON nach LaTeX (CircuiTikZ) exportieren
    Export {
        /// Pfad zur Diagramm-JSON-Datei
        diagram: PathBuf,
        /// Vollständiges LaTeX-Dokument erzeugen
        #[arg(long)]
        include_header: bool,
        /// Koordinaten-Skalierung
        #[arg(long)]
        scale: Option<f32>,
        /// Zieldatei (sonst stdout)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Beispiel-Szenario über den Controller aufbauen und als JSON ausgeben
    Demo,
}

fn main() -> anyhow::Result<()> {
    AppRunner::run(Cli::parse())
}

struct AppRunner;

impl AppRunner {
    fn run(cli: Cli) -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Circuit Schematic Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let mut options = EditorOptions::load_from_file(&config_path);
        if let Some(server) = cli.server {
            options.export_service_url = server;
        }

        match cli.command {
            Command::Health => Self::health(&options),
            Command::Components => Self::components(&options),
            Command::Export {
                diagram,
                include_header,
                scale,
                out,
            } => Self::export(&options, diagram, include_header, scale, out),
            Command::Demo => Self::demo(options),
        }
    }

    fn health(options: &EditorOptions) -> anyhow::Result<()> {
        let client = ExportClient::from_options(options);
        let health = client.health()?;
        println!("{} {} ({})", health.service, health.version, health.status);
        Ok(())
    }

    fn components(options: &EditorOptions) -> anyhow::Result<()> {
        let client = ExportClient::from_options(options);
        let library = client.components()?;
        for entry in &library.components {
            println!("{:<12} {}", entry.kind, entry.tikz);
        }
        println!("{} Bauteile", library.count);
        Ok(())
    }

    fn export(
        options: &EditorOptions,
        path: PathBuf,
        include_header: bool,
        scale: Option<f32>,
        out: Option<PathBuf>,
    ) -> anyhow::Result<()> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Diagramm nicht lesbar: {}", path.display()))?;
        let diagram: Diagram = serde_json::from_str(&content)
            .with_context(|| format!("Ungültiges Diagramm-JSON: {}", path.display()))?;

        let client = ExportClient::from_options(options);
        let latex = client.export(
            &diagram,
            ExportOptions {
                include_header: include_header || options.export_include_header,
                scale: scale.or(Some(options.export_scale)),
            },
        )?;

        match out {
            Some(out) => {
                std::fs::write(&out, latex)
                    .with_context(|| format!("Schreiben fehlgeschlagen: {}", out.display()))?;
                log::info!("LaTeX geschrieben: {}", out.display());
            }
            None => println!("{}", latex),
        }
        Ok(())
    }

    /// Widerstand und Kondensator verbinden, dann den Widerstand löschen.
    fn demo(options: EditorOptions) -> anyhow::Result<()> {
        let mut state = AppState::with_options(options);
        let mut controller = AppController::new();

        let resistor = state.repository().peek_next_component_id();
        controller.handle_intent(
            &mut state,
            AppIntent::AddComponentRequested {
                component: NewComponent::new(ComponentKind::Resistor, Vec2::new(100.0, 100.0)),
            },
        )?;
        let capacitor = state.repository().peek_next_component_id();
        controller.handle_intent(
            &mut state,
            AppIntent::AddComponentRequested {
                component: NewComponent::new(ComponentKind::Capacitor, Vec2::new(200.0, 100.0)),
            },
        )?;
        controller.handle_intent(
            &mut state,
            AppIntent::ConnectRequested {
                source: Port::new(resistor, PortSide::Right),
                target: Port::new(capacitor, PortSide::Left),
                waypoints: Vec::new(),
            },
        )?;
        controller.handle_intent(
            &mut state,
            AppIntent::DeleteComponentRequested { id: resistor },
        )?;

        let diagram = state.to_diagram(None);
        println!("{}", serde_json::to_string_pretty(&diagram)?);
        Ok(())
    }
}
