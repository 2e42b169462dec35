//! Rotation fairness: how often each participant held each role.

use tune_domain::domain::{Participant, ParticipantId, Role};

use crate::schedule::ScheduledRound;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleTally {
    pub participant_id: ParticipantId,
    pub name: String,
    pub dj: u32,
    pub player: u32,
    pub stealer: u32,
    pub inactive: u32,
}

impl RoleTally {
    fn bump(&mut self, role: Role) {
        match role {
            Role::Dj => self.dj += 1,
            Role::Player => self.player += 1,
            Role::Stealer => self.stealer += 1,
            Role::Inactive => self.inactive += 1,
        }
    }
}

/// Role counts per participant, in seat order.
pub fn tally_roles(participants: &[Participant], schedule: &[ScheduledRound]) -> Vec<RoleTally> {
    participants
        .iter()
        .map(|p| {
            let mut tally = RoleTally {
                participant_id: p.participant_id,
                name: p.name().to_string(),
                dj: 0,
                player: 0,
                stealer: 0,
                inactive: 0,
            };
            for round in schedule {
                if let Some(role) = round.roles.role_of(p.participant_id) {
                    tally.bump(role);
                }
            }
            tally
        })
        .collect()
}

pub fn print_schedule(schedule: &[ScheduledRound]) {
    println!("\n=== Role Schedule ===");
    for round in schedule {
        let roles = &round.roles;
        let players: Vec<&str> = roles.players.iter().map(|p| p.name()).collect();
        let inactive: Vec<&str> = roles.inactive.iter().map(|p| p.name()).collect();
        println!(
            "Round {:>3}: DJ={} | Players=[{}] | Stealer={} | Inactive=[{}]",
            round.round_number,
            roles.dj.name(),
            players.join(", "),
            roles.stealer.as_ref().map(|p| p.name()).unwrap_or("-"),
            inactive.join(", "),
        );
    }
}

pub fn print_fairness(tallies: &[RoleTally]) {
    println!("\n=== Rotation Fairness ===");
    println!(
        "{:<20} {:>4} {:>7} {:>8} {:>9}",
        "Participant", "DJ", "Player", "Stealer", "Inactive"
    );
    for t in tallies {
        println!(
            "{:<20} {:>4} {:>7} {:>8} {:>9}",
            t.name, t.dj, t.player, t.stealer, t.inactive
        );
    }
}
