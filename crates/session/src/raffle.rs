//! Raffle console: tickets, scan log, and the winner draw.

use catalog::records::Moment;
use rand::{Rng, RngExt};

/// Tickets issued to the local user when the console opens.
const TICKET_COUNT: usize = 3;
const TICKET_LEN: usize = 8;

/// Scan steps performed before the winner is revealed.
const SCAN_STEPS: u32 = 20;

/// Cadence of scan steps while a draw is running.
pub const SCAN_PERIOD_MS: i64 = 150;

/// Mid-draw the log keeps only this many trailing lines before appending.
const SCAN_LOG_TAIL: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaffleConsole {
    tickets: Vec<String>,
    logs: Vec<String>,
    scans_left: u32,
    winner: Option<String>,
}

impl RaffleConsole {
    /// Opens the console for a moment, issuing tickets and the boot log.
    pub fn open(moment: &Moment, rng: &mut impl Rng) -> Self {
        let tickets: Vec<String> = (0..TICKET_COUNT).map(|_| random_ticket(rng)).collect();
        let pool_assets = moment.capacity.max * 4;
        let logs = vec![
            "[SYSTEM] PROTOCOL INITIALIZED".to_string(),
            "[SYSTEM] SYNCING PARTICIPANT DATA...".to_string(),
            format!("[SYSTEM] 0x71C...92A TICKETS: {}", tickets.len()),
            format!("[POOL] TOTAL ASSETS: {pool_assets}"),
            "[STATUS] AWAITING OPERATOR INPUT".to_string(),
        ];
        Self {
            tickets,
            logs,
            scans_left: 0,
            winner: None,
        }
    }

    pub fn tickets(&self) -> &[String] {
        &self.tickets
    }

    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    pub fn is_drawing(&self) -> bool {
        self.scans_left > 0
    }

    /// Begins a draw. A draw already in progress is left alone.
    pub fn start_draw(&mut self) -> bool {
        if self.is_drawing() {
            return false;
        }
        self.winner = None;
        self.scans_left = SCAN_STEPS;
        true
    }

    /// One scan step; the final step draws the winner from the tickets.
    ///
    /// Returns the winner when this step completed the draw.
    pub fn advance_scan(&mut self, rng: &mut impl Rng) -> Option<&str> {
        if !self.is_drawing() {
            return None;
        }

        if self.logs.len() > SCAN_LOG_TAIL {
            self.logs.drain(..self.logs.len() - SCAN_LOG_TAIL);
        }
        let probe = random_ticket(rng);
        self.logs.push(format!("[SCAN] SEARCHING... {probe}"));

        self.scans_left -= 1;
        if self.scans_left > 0 {
            return None;
        }

        let winner = self.tickets[rng.random_range(0..self.tickets.len())].clone();
        self.logs
            .push(format!("[SUCCESS] WINNER IDENTIFIED: {winner}"));
        self.logs.push("[SYSTEM] PROTOCOL COMPLETE.".to_string());
        self.winner = Some(winner);
        self.winner.as_deref()
    }
}

fn random_ticket(rng: &mut impl Rng) -> String {
    (0..TICKET_LEN)
        .map(|_| (rng.sample(rand::distr::Alphanumeric) as char).to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{RaffleConsole, SCAN_STEPS};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn console(seed: u64) -> (RaffleConsole, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let moment = catalog::mock::moments().remove(1);
        (RaffleConsole::open(&moment, &mut rng), rng)
    }

    #[test]
    fn boot_log_reports_tickets_and_pool() {
        let (console, _) = console(7);
        assert_eq!(console.tickets().len(), 3);
        assert!(console.tickets().iter().all(|t| t.len() == 8));
        // Pop-up capacity max is 15, so the pool advertises 60 assets.
        assert!(console.logs().iter().any(|l| l.contains("TOTAL ASSETS: 60")));
        assert!(!console.is_drawing());
    }

    #[test]
    fn draw_runs_to_a_winner_from_the_ticket_pool() {
        let (mut console, mut rng) = console(7);
        assert!(console.start_draw());

        let mut completed_at = None;
        for step in 0..SCAN_STEPS {
            if console.advance_scan(&mut rng).is_some() {
                completed_at = Some(step + 1);
            }
        }
        assert_eq!(completed_at, Some(SCAN_STEPS));
        let winner = console.winner().expect("winner").to_string();
        assert!(console.tickets().contains(&winner));
        assert!(console.logs().iter().any(|l| l.contains("WINNER IDENTIFIED")));
        assert!(!console.is_drawing());
    }

    #[test]
    fn draws_are_reproducible_for_a_seed() {
        let run = |seed| {
            let (mut console, mut rng) = console(seed);
            console.start_draw();
            while console.advance_scan(&mut rng).is_none() {}
            console.winner().expect("winner").to_string()
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn starting_twice_does_not_restart_a_running_draw() {
        let (mut console, mut rng) = console(7);
        assert!(console.start_draw());
        console.advance_scan(&mut rng);
        assert!(!console.start_draw());
        assert!(console.is_drawing());
    }

    #[test]
    fn scan_log_keeps_a_bounded_tail() {
        let (mut console, mut rng) = console(7);
        console.start_draw();
        while console.advance_scan(&mut rng).is_none() {}
        // 10 retained lines + the scan that completed + two result lines.
        assert!(console.logs().len() <= 13);
    }
}
