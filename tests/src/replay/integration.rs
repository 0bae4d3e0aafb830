#![cfg(test)]
use masterhacker_common::display::WidthTier;
use masterhacker_core::console::Transcript;
use masterhacker_core::engine::catalog::{DECRYPTED_MESSAGES, DEMO_SCRIPT, FALLBACK_ISPS};
use masterhacker_core::engine::{CommandEngine, Seeding};
use masterhacker_core::session::SessionState;

fn replay(tier: WidthTier, unicode: bool, lines: &[&str]) -> String {
    let mut engine = CommandEngine::new(Transcript::new(tier, unicode), Seeding::replay());
    let mut state = SessionState::new();
    engine.banner();
    engine.run_script(lines.iter().copied(), &mut state);
    engine.into_console().take()
}

fn location_line(out: &str) -> &str {
    out.lines()
        .find(|line| line.starts_with("Location found: "))
        .unwrap_or_default()
}

#[test]
fn demo_is_deterministic() {
    for tier in [WidthTier::Compact, WidthTier::Standard, WidthTier::Wide] {
        for unicode in [false, true] {
            let first = replay(tier, unicode, &DEMO_SCRIPT);
            let second = replay(tier, unicode, &DEMO_SCRIPT);
            assert_eq!(first, second, "{tier} unicode={unicode}");
        }
    }
}

#[test]
fn demo_ends_with_single_farewell() {
    let out = replay(WidthTier::Standard, false, &DEMO_SCRIPT);
    assert_eq!(out.matches("Connection terminated.").count(), 1);
    assert!(out.ends_with("> exit\nConnection terminated.\nStay anonymous, hacker.\n"));
}

#[test]
fn random_draws_repeat_under_the_replay_seed() {
    let script = ["decrypt", "trace GHOST-NODE", "decrypt"];
    assert_eq!(
        replay(WidthTier::Standard, false, &script),
        replay(WidthTier::Standard, false, &script)
    );
}

#[test]
fn unknown_trace_has_bounded_coordinates() -> anyhow::Result<()> {
    let mut engine = CommandEngine::new(Transcript::default(), Seeding::Entropy);
    let mut state = SessionState::new();

    for _ in 0..25 {
        engine.execute_line("trace unknown-host", &mut state);
        let out = engine.console_mut().take();

        let coordinates = location_line(&out)
            .strip_prefix("Location found: ")
            .and_then(|rest| rest.strip_suffix(" deg W"))
            .ok_or_else(|| anyhow::anyhow!("unexpected trace output: {out}"))?;
        let (lat, lon) = coordinates
            .split_once(" deg N, ")
            .ok_or_else(|| anyhow::anyhow!("unexpected coordinates: {coordinates}"))?;

        for (text, bound) in [(lat, 90.0), (lon, 180.0)] {
            let decimals = text.split_once('.').map(|(_, d)| d.len());
            assert_eq!(decimals, Some(4), "{text}");
            let value: f64 = text.parse()?;
            assert!((-bound..=bound).contains(&value), "{value} out of range");
        }

        let isp = out
            .lines()
            .find_map(|line| line.strip_prefix("ISP: "))
            .unwrap_or_default();
        assert!(FALLBACK_ISPS.contains(&isp), "{isp}");
    }
    assert_eq!(state, SessionState::new());
    Ok(())
}

#[test]
fn decrypt_picks_from_catalog() {
    let mut engine = CommandEngine::new(Transcript::default(), Seeding::Entropy);
    let mut state = SessionState::new();

    for _ in 0..10 {
        engine.execute_line("decrypt", &mut state);
        let out = engine.console_mut().take();
        let message = out
            .lines()
            .find_map(|line| line.strip_prefix("Decrypted message: \""))
            .and_then(|rest| rest.strip_suffix('"'))
            .unwrap_or_default();
        assert!(DECRYPTED_MESSAGES.contains(&message), "{message}");
    }
}

#[test]
fn reseeding_restarts_the_sequence() {
    let mut engine = CommandEngine::new(Transcript::default(), Seeding::replay());
    let mut state = SessionState::new();

    engine.execute_line("trace ALPHA", &mut state);
    let first = location_line(&engine.console_mut().take()).to_string();

    engine.reseed(Seeding::replay());
    engine.execute_line("trace ALPHA", &mut state);
    let second = location_line(&engine.console_mut().take()).to_string();

    assert_eq!(first, second);
}
