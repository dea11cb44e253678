use clap::Parser;
use eframe::egui;
use log::{info, warn};
use std::path::PathBuf;
use std::time::Duration;

use quick_pick::config::DemoConfig;
use quick_pick::dropdown::{
    Choice, Dropdown, DropdownState, OpenRegistry, OptionRenderer, ValueRenderer,
};
use quick_pick::lookup::SlowLookup;
use quick_pick::theme::Theme;

#[derive(Parser, Debug)]
#[command(name = "quick-pick", about = "Searchable dropdown demo")]
struct Args {
    /// Load option sets and theme from this YAML file instead of the
    /// default config location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured theme
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Add a third dropdown backed by a slow background lookup
    #[arg(long)]
    remote: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

/// Animal rows get the original demo's flame treatment.
struct FlameRow;

impl OptionRenderer for FlameRow {
    fn render(&mut self, ui: &mut egui::Ui, choice: &Choice, selected: bool) -> egui::Response {
        ui.selectable_label(
            selected,
            egui::RichText::new(format!("🔥 {} 🔥", choice.label)).strong(),
        )
    }
}

struct ItalicValue;

impl ValueRenderer for ItalicValue {
    fn render(&mut self, selected: Option<&Choice>) -> egui::WidgetText {
        match selected {
            Some(choice) => egui::RichText::new(choice.label.as_str()).italics().into(),
            None => egui::RichText::new("Choose an animal").weak().into(),
        }
    }
}

struct DemoApp {
    config: DemoConfig,
    registry: OpenRegistry,

    fruit: DropdownState,
    animal: DropdownState,
    country: DropdownState,

    selected_fruit: Option<Choice>,
    selected_animal: Option<Choice>,
    selected_country: Option<Choice>,

    lookup: SlowLookup,
    show_remote: bool,
}

impl DemoApp {
    fn new(args: &Args) -> Self {
        let mut config = match &args.config {
            Some(path) => match DemoConfig::load_from(path) {
                Ok(config) => {
                    info!("Loaded config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!("{}; using defaults", e);
                    DemoConfig::default()
                }
            },
            None => DemoConfig::load(),
        };

        if let Some(theme) = args.theme {
            config.theme = theme.into();
        }

        Self {
            config,
            registry: OpenRegistry::new(),
            fruit: DropdownState::new(),
            animal: DropdownState::new(),
            country: DropdownState::new(),
            selected_fruit: None,
            selected_animal: None,
            selected_country: None,
            lookup: SlowLookup::new(Duration::from_millis(400)),
            show_remote: args.remote,
        }
    }

    fn load_options_dialog(&mut self, ctx: &egui::Context) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("YAML", &["yaml", "yml"])
            .pick_file()
        else {
            return;
        };

        match DemoConfig::load_from(&path) {
            Ok(config) => {
                info!("Loaded option sets from {:?}", path);
                self.config = config;
                self.config.theme.apply(ctx);
                // The old selections may not exist in the new sets
                self.selected_fruit = None;
                self.selected_animal = None;
            }
            Err(e) => warn!("{}", e),
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("QuickPick - Searchable Dropdown Demo");
            ui.separator();

            ui.horizontal(|ui| {
                if ui
                    .button(format!("Theme: {}", self.config.theme.name()))
                    .clicked()
                {
                    self.config.theme.cycle();
                    self.config.theme.apply(ctx);
                    if let Err(e) = self.config.save() {
                        warn!("{}", e);
                    }
                }

                if ui.button("Load options...").clicked() {
                    self.load_options_dialog(ctx);
                }
            });

            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let fruit = Dropdown::new(
                    "fruit-dropdown",
                    &mut self.fruit,
                    &mut self.registry,
                    &self.config.fruits,
                )
                .selected(self.selected_fruit.as_ref())
                .show(ui);
                if let Some(choice) = fruit.picked {
                    self.selected_fruit = Some(choice);
                }

                let animal = Dropdown::new(
                    "animal-dropdown",
                    &mut self.animal,
                    &mut self.registry,
                    &self.config.animals,
                )
                .selected(self.selected_animal.as_ref())
                .render_option(FlameRow)
                .render_value(ItalicValue)
                .show(ui);
                if let Some(choice) = animal.picked {
                    self.selected_animal = Some(choice);
                }

                if self.show_remote {
                    let country = Dropdown::new(
                        "country-dropdown",
                        &mut self.country,
                        &mut self.registry,
                        &[],
                    )
                    .selected(self.selected_country.as_ref())
                    .prompt("Choose a country...")
                    .placeholder("Type to search countries...")
                    .search_provider(&mut self.lookup)
                    .show(ui);
                    if let Some(choice) = country.picked {
                        self.selected_country = Some(choice);
                    }
                }
            });

            ui.add_space(12.0);
            ui.separator();

            let selection = |label: &str, choice: &Option<Choice>| {
                format!(
                    "{}: {}",
                    label,
                    choice.as_ref().map_or("-", |c| c.label.as_str())
                )
            };
            ui.label(selection("Fruit", &self.selected_fruit));
            ui.label(selection("Animal", &self.selected_animal));
            if self.show_remote {
                ui.label(selection("Country", &self.selected_country));
            }
        });
    }
}

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    info!("QuickPick starting...");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([980.0, 520.0])
            .with_title("QuickPick - Searchable Dropdown Demo"),
        ..Default::default()
    };

    eframe::run_native(
        "QuickPick",
        native_options,
        Box::new(move |cc| {
            let app = DemoApp::new(&args);
            app.config.theme.apply(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
}
