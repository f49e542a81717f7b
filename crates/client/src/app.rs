//! Line-oriented presentation loop.
//!
//! Renders the encounter, reads one choice per line, and prints the turn's
//! narration. All game decisions live in the core; this module only formats
//! and forwards.

use std::io::{BufRead, Write};

use anyhow::Result;
use reverie_core::turn::EndCondition;
use reverie_core::types::Attribute;
use reverie_runtime::{Session, TurnOutcome};

pub fn run(mut session: Session) -> Result<()> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{}", Session::opening_narration());

    loop {
        render(&session);
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let input = line?.trim().to_lowercase();

        match input.as_str() {
            "" => continue,
            "quit" | "exit" | "q" => return Ok(()),
            "reset" => {
                session.reset()?;
                println!("{}", Session::opening_narration());
                continue;
            }
            _ => {}
        }

        let Ok(choice) = input.parse::<usize>() else {
            println!("enter a card number, `reset`, or `quit`");
            continue;
        };
        let Some(index) = choice.checked_sub(1) else {
            println!("cards are numbered from 1");
            continue;
        };

        match session.choose_card(index) {
            Ok(outcome) => print_outcome(&outcome),
            Err(err) => println!("{err}"),
        }
    }
}

fn render(session: &Session) {
    let state = session.state();
    let battle = &state.battle;
    let enemy = &state.enemy;

    println!();
    println!(
        "== turn {}/{} · collapse {}% (cap {}) ==",
        battle.turn, battle.max_turn, battle.collapse, battle.collapse_limit
    );
    println!(
        "{}  HP {}/{}  echo {}{}",
        enemy.name,
        enemy.hp,
        enemy.max_hp,
        enemy.echo_stacks,
        seal_summary(&state.enemy.seals)
    );
    for member in &state.party.members {
        let name = session
            .character_name(&member.character)
            .unwrap_or(member.character.as_str());
        println!("  {name}  Lv{}  HP {}", member.level, member.hp);
    }

    for (i, card) in session.cards().iter().enumerate() {
        let owner = session
            .character_name(&card.character)
            .unwrap_or(card.character.as_str());
        let preview = session
            .predict(i)
            .map(|attr| attr.to_string())
            .unwrap_or_else(|_| "?".into());
        println!(
            "  {}. {owner} · {}  [{}/{}] → {preview}",
            i + 1,
            card.name,
            card.attr1,
            card.attr2.map(|a| a.to_string()).unwrap_or_else(|| "-".into()),
        );
    }
}

fn seal_summary(seals: &reverie_core::state::SealState) -> String {
    let mut parts = Vec::new();
    for attr in Attribute::ALL {
        let remaining = seals.remaining(attr);
        if remaining > 0 {
            parts.push(format!("{attr} sealed {remaining}t"));
        }
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!("  ({})", parts.join(", "))
    }
}

fn print_outcome(outcome: &TurnOutcome) {
    // The log arrives most-recent-first; a scrolling terminal reads better
    // chronologically.
    for line in outcome.log.iter().rev() {
        println!("{line}");
    }
    match outcome.end {
        Some(EndCondition::Collapse) | Some(EndCondition::Timeout) => {
            println!("the encounter is over. type `reset` to start again");
        }
        _ => {}
    }
}
