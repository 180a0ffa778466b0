//! Journal (natif) : backend `log` minimal vers stderr.
//!
//! Niveau :
//! - `init()` lit `NOTATION_LOG` (error|warn|info|debug|trace|off), défaut `warn`
//! - `init_with_level(..)` force le niveau
//!
//! Une seule installation par processus : un second appel renvoie l’erreur de `log`.

use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Variable d’environnement lue par `init()`.
pub const VAR_NIVEAU: &str = "NOTATION_LOG";

const NIVEAU_DEFAUT: LevelFilter = LevelFilter::Warn;

struct Journal {
    niveau: LevelFilter,
}

impl Log for Journal {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.niveau
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut err = std::io::stderr().lock();
        // stderr fermé : rien à faire
        let _ = writeln!(
            err,
            "[{:<5} {}] {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

pub fn init() -> Result<(), SetLoggerError> {
    init_with_level(niveau_depuis(std::env::var(VAR_NIVEAU).ok().as_deref()))
}

pub fn init_with_level(niveau: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(Journal { niveau }))?;
    log::set_max_level(niveau);
    Ok(())
}

/// Niveau lu depuis le texte de la variable (insensible à la casse).
fn niveau_depuis(valeur: Option<&str>) -> LevelFilter {
    valeur
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(NIVEAU_DEFAUT)
}
