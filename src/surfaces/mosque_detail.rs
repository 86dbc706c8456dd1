//! Mosque detail screen: one mosque from the directory with today's jamat
//! timings, the daily five as rows and Jummah as a separate card.

use serde::Serialize;

use crate::mosques::Mosque;
use crate::timings::store::TimingsStore;
use crate::timings::Prayer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimingLine {
    pub prayer: Prayer,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MosqueDetailView {
    pub name: String,
    /// "location • distance away"
    pub subtitle: String,
    pub daily: Vec<TimingLine>,
    pub jummah: String,
}

pub struct MosqueDetailScreen {
    store: TimingsStore,
    mosque: &'static Mosque,
}

impl MosqueDetailScreen {
    pub fn new(store: TimingsStore, mosque: &'static Mosque) -> Self {
        Self { store, mosque }
    }

    pub fn mosque(&self) -> &'static Mosque {
        self.mosque
    }

    pub fn render(&self) -> MosqueDetailView {
        let snapshot = self.store.get();

        MosqueDetailView {
            name: self.mosque.name.to_string(),
            subtitle: format!("{} • {} away", self.mosque.location, self.mosque.distance),
            daily: snapshot
                .daily()
                .map(|(prayer, time)| TimingLine {
                    prayer,
                    time: time.to_string(),
                })
                .collect(),
            jummah: snapshot.jummah().to_string(),
        }
    }

    pub fn print(view: &MosqueDetailView) {
        log_block_start!("{}", view.name);
        log_indented!("{}", view.subtitle);

        log_block_start!("Today's Jamat Timings");
        for line in &view.daily {
            log_indented!("{:<8} {:>8}", line.prayer.as_str(), line.time);
        }

        log_block_start!("Friday Jummah");
        log_indented!("┏━━━━━━━━━━━━━━━━━━━━━━━━━━┓");
        log_indented!("┃ Jummah Prayer  {:>9} ┃", view.jummah);
        log_indented!("┗━━━━━━━━━━━━━━━━━━━━━━━━━━┛");

        log_pipe!();
        log_info!("Mosque admin? Run 'jamat admin' to update timings");
    }
}
