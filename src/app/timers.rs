use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerPurpose {
    Idle,
    AutoProgress,
    AdminHold,
}

/// Plazo pendiente. `epoch` es la época de transición capturada al programarlo;
/// `None` significa que no depende de las transiciones (pulsación de administración).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deadline {
    pub due: Duration,
    epoch: Option<u64>,
}

/// Un plazo como mucho por propósito. Programar uno nuevo sustituye al anterior.
#[derive(Clone, Debug, Default)]
pub struct Timers {
    epoch: u64,
    idle: Option<Deadline>,
    auto_progress: Option<Deadline>,
    admin_hold: Option<Deadline>,
}

impl Timers {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Cada transición de pantalla abre una época nueva; los plazos de épocas anteriores quedan muertos.
    pub fn bump_epoch(&mut self) -> u64 {
        self.epoch += 1;
        self.epoch
    }

    pub fn schedule(&mut self, purpose: TimerPurpose, now: Duration, after: Duration) {
        let epoch = match purpose {
            TimerPurpose::AdminHold => None,
            TimerPurpose::Idle | TimerPurpose::AutoProgress => Some(self.epoch),
        };
        let deadline = Deadline { due: now + after, epoch };
        log::debug!("Temporizador {purpose:?} programado para {:?}", deadline.due);
        *self.slot_mut(purpose) = Some(deadline);
    }

    pub fn cancel(&mut self, purpose: TimerPurpose) -> bool {
        let was_live = self.slot_mut(purpose).take().is_some();
        if was_live {
            log::debug!("Temporizador {purpose:?} cancelado");
        }
        was_live
    }

    pub fn clear(&mut self) {
        self.idle = None;
        self.auto_progress = None;
        self.admin_hold = None;
    }

    pub fn is_live(&self, purpose: TimerPurpose) -> bool {
        self.slot(purpose).is_some()
    }

    pub fn deadline(&self, purpose: TimerPurpose) -> Option<Deadline> {
        *self.slot(purpose)
    }

    /// Saca el primer plazo vencido que siga vigente. Los de otra época se descartan sin efecto.
    pub fn take_expired(&mut self, now: Duration) -> Option<TimerPurpose> {
        const ORDER: [TimerPurpose; 3] = [
            TimerPurpose::AdminHold,
            TimerPurpose::AutoProgress,
            TimerPurpose::Idle,
        ];
        let current = self.epoch;
        for purpose in ORDER {
            let slot = self.slot_mut(purpose);
            let pending = *slot;
            match pending {
                Some(deadline) if deadline.due <= now => {
                    *slot = None;
                    match deadline.epoch {
                        Some(epoch) if epoch != current => {
                            log::debug!("Temporizador {purpose:?} obsoleto (época {epoch}), ignorado");
                        }
                        _ => return Some(purpose),
                    }
                }
                _ => {}
            }
        }
        None
    }

    /// El vencimiento más próximo, para pedir el repintado a tiempo.
    pub fn next_due(&self) -> Option<Duration> {
        [self.idle, self.auto_progress, self.admin_hold]
            .into_iter()
            .flatten()
            .map(|d| d.due)
            .min()
    }

    fn slot(&self, purpose: TimerPurpose) -> &Option<Deadline> {
        match purpose {
            TimerPurpose::Idle => &self.idle,
            TimerPurpose::AutoProgress => &self.auto_progress,
            TimerPurpose::AdminHold => &self.admin_hold,
        }
    }

    fn slot_mut(&mut self, purpose: TimerPurpose) -> &mut Option<Deadline> {
        match purpose {
            TimerPurpose::Idle => &mut self.idle,
            TimerPurpose::AutoProgress => &mut self.auto_progress,
            TimerPurpose::AdminHold => &mut self.admin_hold,
        }
    }
}
