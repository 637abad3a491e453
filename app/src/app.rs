use eframe::egui;
use minefield_core::{GameEngine, LayoutGenerator, RandomLayoutGenerator, savefile};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board;

pub const WINDOW_WIDTH: f32 = board::BOARD_PIXELS + 30.0;
pub const WINDOW_HEIGHT: f32 = board::BOARD_PIXELS + 100.0;

const GAME_STORAGE_KEY: &str = "minefield:game";
const SAVE_PATH: &str = "game.txt";

const INSTRUCTIONS: &str = "Welcome to Minesweeper! There are 10 mines hidden in this \
9 x 9 grid, and your task is to locate these mines by revealing all 71 non-mine cells. \
Revealing a non-mine cell shows how many mines are in the 8 cells around it, while \
revealing a mine cell instantly loses. You may flag cells that you think contain mines \
with the right mouse button, or by turning on the Flag button and clicking them. If you \
wish to save the game to a file, press the Save button; this also saves your flags. To \
load a game from a file, press the Load button. If you wish to restart, press the Reset \
button.";

pub struct MinefieldApp {
    engine: GameEngine,
    rng: SmallRng,
    flag_mode: bool,
    status: String,
    show_instructions: bool,
}

impl MinefieldApp {
    pub fn new(cc: &eframe::CreationContext<'_>, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::seed_from_u64(rand::rng().random()),
        };

        let restored: Option<GameEngine> = cc
            .storage
            .and_then(|storage| storage.get_string(GAME_STORAGE_KEY))
            .and_then(|text| serde_json::from_str(&text).ok());

        let (engine, status) = match restored {
            Some(engine) => {
                log::debug!("restored a persisted game");
                let status = status_text(&engine, false).to_string();
                (engine, status)
            }
            None => (fresh_game(&mut rng), "Click a cell to begin".to_string()),
        };

        Self {
            engine,
            rng,
            flag_mode: false,
            status,
            show_instructions: false,
        }
    }

    fn new_game(&mut self) {
        self.engine = fresh_game(&mut self.rng);
        self.flag_mode = false;
        self.status = "Click a cell to begin".to_string();
    }

    fn toggle_flag_mode(&mut self) {
        self.flag_mode = !self.flag_mode;
        self.refresh_status();
    }

    fn refresh_status(&mut self) {
        self.status = status_text(&self.engine, self.flag_mode).to_string();
    }

    fn handle_click(&mut self, click: board::BoardClick) {
        let updated = if click.secondary || self.flag_mode {
            self.engine.toggle_flag(click.coords).has_update()
        } else {
            self.engine.reveal(click.coords).has_update()
        };
        if updated {
            self.refresh_status();
        } else {
            log::trace!("ignored click at {:?}", click.coords);
        }
    }

    fn save_game(&mut self) {
        match std::fs::write(SAVE_PATH, savefile::to_text(&self.engine)) {
            Ok(()) => self.status = "Successfully saved game".to_string(),
            Err(err) => {
                log::warn!("saving to {SAVE_PATH} failed: {err}");
                self.status = "Failed saving game".to_string();
            }
        }
    }

    /// A game only replaces the current one once its grids validate; an
    /// unreadable file and a corrupt one get different messages.
    fn load_game(&mut self) {
        let text = match std::fs::read_to_string(SAVE_PATH) {
            Ok(text) => text,
            Err(err) => {
                log::warn!("reading {SAVE_PATH} failed: {err}");
                self.status = "Error loading game".to_string();
                return;
            }
        };
        match savefile::from_text(&text) {
            Ok(engine) => {
                self.engine = engine;
                self.status = "Successfully loaded game".to_string();
            }
            Err(err) => {
                log::warn!("rejected save data: {err}");
                self.status = "Invalid gamestate".to_string();
            }
        }
    }
}

fn fresh_game(rng: &mut SmallRng) -> GameEngine {
    let seed = rng.random();
    log::debug!("new game, seed {seed}");
    GameEngine::new(RandomLayoutGenerator::new(seed).generate())
}

/// Win/loss take precedence in the status line; otherwise it hints at what a
/// click will do in the current mode.
fn status_text(engine: &GameEngine, flag_mode: bool) -> &'static str {
    if engine.is_finished() {
        if engine.state().is_won() {
            "You win!"
        } else {
            "You lose!"
        }
    } else if flag_mode {
        "Click a cell to flag it"
    } else {
        "Click a cell to reveal it"
    }
}

impl eframe::App for MinefieldApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Reset").clicked() {
                    self.new_game();
                }
                if ui
                    .selectable_label(self.flag_mode, "Flag")
                    .on_hover_text("Toggle flagging mode; right click always flags")
                    .clicked()
                {
                    self.toggle_flag_mode();
                }
                if ui.button("Save").clicked() {
                    self.save_game();
                }
                if ui.button("Load").clicked() {
                    self.load_game();
                }
                if ui.button("Instructions").clicked() {
                    self.show_instructions = true;
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Mines left: {}", self.engine.mines_left()));
                });
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(click) = board::show(ui, &self.engine) {
                self.handle_click(click);
            }
        });

        if self.show_instructions {
            egui::Window::new("Instructions")
                .open(&mut self.show_instructions)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.set_max_width(300.0);
                    ui.label(INSTRUCTIONS);
                });
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match serde_json::to_string(&self.engine) {
            Ok(text) => storage.set_string(GAME_STORAGE_KEY, text),
            Err(err) => log::warn!("could not persist the game: {err}"),
        }
    }
}
