/// Pipeline tests: page HTML/text → FactRecord, plus name resolution.
/// All fixtures are inline; nothing here touches the network.
use mitigation_scout::facts::{
    normalize, pick_best, segment, AliasTable, FactPipeline, LookupTable, MarkerConfig,
};
use mitigation_scout::scraping::main_text;
use mitigation_scout::{CatalogEntry, FactRecord, MechanicType, Scope};

fn init_logger() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn facts(text: &str) -> FactRecord {
    FactPipeline::default().run(Some(text))
}

#[test]
fn normalize_is_total_and_idempotent() {
    for s in ["", " ", "\"Rise!\"", "Lesser \u{201C}Guard!\u{201D}", "日本語", "Reaper\u{2019}s"] {
        let n = normalize(s);
        assert!(n.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        assert_eq!(normalize(&n), n);
    }
}

#[test]
fn resolve_handles_case_and_punctuation() {
    let catalog = vec![
        CatalogEntry { name: "\"Rise!\"".into(), id: 9135 },
        CatalogEntry { name: "Signet of Judgment".into(), id: 9156 },
    ];
    let table = LookupTable::build(&catalog);
    let aliases = AliasTable::default();
    assert_eq!(table.resolve(&aliases, "RISE"), Some(9135));
    assert_eq!(table.resolve(&aliases, "Signet of Judgment"), Some(9156));
    assert_eq!(table.resolve(&aliases, "signet of judgment"), Some(9156));
    assert_eq!(table.resolve(&aliases, "Signet-of-Judgment"), Some(9156));
    assert_eq!(table.resolve(&aliases, "Drink Ambrosia"), None);
}

#[test]
fn segment_partitions_from_first_marker() {
    let text = "Preamble\nPvE\nA\nPvP\nB\nWvW\nC";
    let blocks = segment(text, &MarkerConfig::default());
    let first = text.find("\nPvE\n").unwrap();
    assert_eq!(format!("{}{}{}", blocks.pve, blocks.pvp, blocks.wvw), &text[first..]);
    assert!(!blocks.pve.contains("Preamble"));
    assert_eq!(blocks.all, text);
}

#[test]
fn pick_best_by_magnitude() {
    assert_eq!(pick_best(&[10, -15, 5]), Some(15));
    assert_eq!(pick_best(&[150, -5]), Some(5));
}

#[test]
fn wvw_value_beats_other_mode_value() {
    init_logger();
    let record = facts("Rocky Loop\nPvE\n-10% Incoming Damage\nWvW\n-15% Incoming Damage");
    assert_eq!(record.incoming_damage_reduction_pct, Some(15));
    assert_eq!(record.scope, Scope::All);
    assert_eq!(record.mechanic_type, MechanicType::PctReduction);
}

#[test]
fn boon_line_percentages_are_ignored() {
    let record = facts(
        "Signet of Judgment\nProtection: -33% Incoming Damage\nResolution: -33% Incoming Condition Damage\n-10% Incoming Damage\n-10% Incoming Condition Damage",
    );
    assert_eq!(record.incoming_damage_reduction_pct, Some(10));
    assert_eq!(record.incoming_condition_damage_reduction_pct, Some(10));
}

#[test]
fn strike_invulnerability() {
    let record = facts("Endure Pain\nYou are invulnerable to attacks.\nDuration: 4s\nRecharge: 60");
    assert_eq!(record.scope, Scope::StrikeOnly);
    assert_eq!(record.mechanic_type, MechanicType::Invuln);
    assert_eq!(record.incoming_damage_reduction_pct, Some(100));
    assert_eq!(record.incoming_condition_damage_reduction_pct, None);
    assert_eq!(record.duration_s, Some(4.0));
    assert_eq!(record.cooldown_s, Some(60));
}

#[test]
fn unavailable_page_is_all_absent() {
    let record = FactPipeline::default().run(None);
    assert_eq!(record, FactRecord::unavailable());
    assert_eq!(record.incoming_damage_reduction_pct, None);
    assert_eq!(record.incoming_condition_damage_reduction_pct, None);
    assert_eq!(record.invuln_detected, None);
    assert_eq!(record.invuln_strike_only, None);
    assert_eq!(record.duration_s, None);
    assert_eq!(record.cooldown_s, None);
    assert_eq!(record.scope, Scope::Unknown);
    assert_eq!(record.mechanic_type, MechanicType::Other);
}

#[test]
fn wiki_html_end_to_end() {
    let html = r#"<html><head><title>Dolyak Stance</title></head><body>
        <div id="mw-head">PvP menu</div>
        <div id="mw-content-text">
          <p>Dolyak Stance</p>
          <h4>PvE</h4><ul><li>-33% <a>Incoming Damage</a></li><li>Recharge: 30</li></ul>
          <h4>WvW</h4><ul><li>-20% <a>Incoming Damage</a></li><li>Duration: 4s</li><li>Recharge: 40</li></ul>
        </div>
    </body></html>"#;
    let text = main_text(html);
    let record = FactPipeline::default().run(Some(text.as_str()));
    assert_eq!(record.incoming_damage_reduction_pct, Some(20));
    assert_eq!(record.duration_s, Some(4.0));
    assert_eq!(record.cooldown_s, Some(40));
    assert_eq!(record.invuln_detected, Some(false));
}
