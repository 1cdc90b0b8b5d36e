//! Campfire Presence - ambient presence simulation
//!
//! A local pseudo-random simulation of "other adventurers resting here",
//! not a networked feature. A background task drifts the online count and
//! rotates ambient system messages.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::sync::RwLock;
use tokio::time::interval;

/// Ambient system messages shown around the campfire
const AMBIENT_MESSAGES: &[&str] = &[
    "여행자가 모닥불 옆에 앉았습니다.",
    "누군가 불 속으로 장작을 던져넣었습니다.",
    "따스한 온기가 마음을 편안하게 합니다...",
    "어디선가 희미한 콧노래 소리가 들립니다.",
    "불티가 밤하늘 위로 춤추며 날아오릅니다.",
    "당신은 혼자가 아닙니다.",
    "또 다른 모험가가 여기서 휴식을 취하고 있습니다.",
];

/// How many recent messages a snapshot carries
const MESSAGE_HISTORY: usize = 3;

/// Simulation timing configuration
#[derive(Debug, Clone)]
pub struct CampfireConfig {
    /// Interval between online-count drifts
    pub drift_interval: Duration,
    /// Interval between ambient messages
    pub message_interval: Duration,
}

impl Default for CampfireConfig {
    fn default() -> Self {
        Self {
            drift_interval: Duration::from_secs(5),
            message_interval: Duration::from_secs(8),
        }
    }
}

/// Point-in-time view of the campfire
#[derive(Debug, Clone)]
pub struct CampfireSnapshot {
    pub online_count: i32,
    pub messages: Vec<String>,
}

#[derive(Debug)]
struct CampfireState {
    online_count: i32,
    messages: Vec<String>,
}

/// Simulated campfire presence
pub struct CampfirePresence {
    state: RwLock<CampfireState>,
    config: CampfireConfig,
}

impl CampfirePresence {
    pub fn new(config: Option<CampfireConfig>) -> Self {
        let initial = rand::thread_rng().gen_range(5..=24);
        Self {
            state: RwLock::new(CampfireState {
                online_count: initial,
                messages: Vec::new(),
            }),
            config: config.unwrap_or_default(),
        }
    }

    /// Start the simulation loop (runs in background)
    pub fn start(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            tracing::info!(
                "Campfire presence started (drift {:?}, messages {:?})",
                self.config.drift_interval,
                self.config.message_interval
            );

            let mut drift = interval(self.config.drift_interval);
            let mut chatter = interval(self.config.message_interval);
            // Both intervals fire immediately; skip the initial ticks
            drift.tick().await;
            chatter.tick().await;

            loop {
                tokio::select! {
                    _ = drift.tick() => self.drift_once().await,
                    _ = chatter.tick() => self.murmur().await,
                }
            }
        })
    }

    /// Current online count and recent messages
    pub async fn snapshot(&self) -> CampfireSnapshot {
        let state = self.state.read().await;
        CampfireSnapshot {
            online_count: state.online_count,
            messages: state.messages.clone(),
        }
    }

    async fn drift_once(&self) {
        let step = rand::thread_rng().gen_range(-1..=1);
        let mut state = self.state.write().await;
        state.online_count = drifted(state.online_count, step);
    }

    async fn murmur(&self) {
        let pick = rand::thread_rng().gen_range(0..AMBIENT_MESSAGES.len());
        let mut state = self.state.write().await;
        state.messages.insert(0, AMBIENT_MESSAGES[pick].to_string());
        state.messages.truncate(MESSAGE_HISTORY);
    }
}

/// Apply one drift step; the campfire never empties below one adventurer
fn drifted(current: i32, step: i32) -> i32 {
    (current + step).max(1)
}
