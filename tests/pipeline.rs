use klimatdata::color::SectorColor;
use klimatdata::keys::{normalize, DataView, KeyRegistry};
use klimatdata::{
    aggregate_sectors, build_axis, MunicipalityEmissions, PipelineConfig, PipelineState,
    SectorSeries, Series,
};

const SAMPLE: &str = r#"{
    "Name": "Ã–stersund",
    "HistoricalEmission": [
        { "Year": 2015, "CO2Equivalent": 100.0 },
        { "Year": 2016, "CO2Equivalent": 110.0 }
    ],
    "Trend": [{ "Year": 2018, "CO2Equivalent": 90.0 }],
    "Budget": [
        { "Year": 2015, "CO2Equivalent": 120.0 },
        { "Year": 2021, "CO2Equivalent": 60.0 }
    ],
    "Sectors": [
        { "Name": "Transporter", "EmissionsPerYear": [{ "Year": 2020, "CO2Equivalent": 50.0 }] },
        { "Name": "Utrikes transporter", "EmissionsPerYear": [{ "Year": 2020, "CO2Equivalent": 30.0 }] },
        { "Name": "Jordbruk", "EmissionsPerYear": [{ "Year": 2020, "CO2Equivalent": 10.0 }] },
        { "Name": "Flyg", "EmissionsPerYear": [] }
    ]
}"#;

fn state() -> PipelineState {
    let config = PipelineConfig::default()
        .with_current_year(2026)
        .with_strict_invariants(true);
    PipelineState::new(config)
        .unwrap()
        .with_municipalities(["Östersund", "Göteborg"])
        .unwrap()
}

#[test]
fn chart_payload_from_json_record() {
    let emissions: MunicipalityEmissions = serde_json::from_str(SAMPLE).unwrap();
    let state = state();

    let name = state.resolve_municipality(&emissions.name).unwrap();
    assert_eq!(name, "Östersund");

    let payload = state.prepare_chart(&emissions).unwrap();
    assert_eq!(payload.axis.labels, (2015..=2021).collect::<Vec<_>>());
    assert_eq!(payload.axis.adjustable_year_start, 2026);

    let ids: Vec<_> = payload.sectors.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["Jordbruk", "Transport", "Flyg"]);

    let transport = &payload.sectors[1];
    assert_eq!(transport.values[5], Some(80.0));
    assert_eq!(transport.color, Some(SectorColor::MidGreen));

    let flyg = &payload.sectors[2];
    assert_eq!(flyg.color, Some(SectorColor::LightYellow));
    assert!(flyg.values.iter().all(Option::is_none));

    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["axis"]["min_year"], 2015);
    assert_eq!(json["sectors"][0]["color"], "#e55819");
    assert_eq!(json["sectors"][1]["color"], "#60b748");
    assert!(json["historical"].get("color").is_none());
}

#[test]
fn corrupt_year_is_rejected_at_parse_time() {
    let corrupt = SAMPLE.replace("\"Year\": 2021", "\"Year\": 3000000");
    let err = serde_json::from_str::<MunicipalityEmissions>(&corrupt).unwrap_err();
    assert!(err.to_string().contains("four-digit"));
}

#[test]
fn sector_totals_survive_aggregation() {
    let emissions: MunicipalityEmissions = serde_json::from_str(SAMPLE).unwrap();
    let grouped = aggregate_sectors(&emissions.sectors);

    let total_in: f64 = emissions
        .sectors
        .iter()
        .filter_map(|s| s.series.value_at(2020))
        .sum();
    let total_out: f64 = grouped.iter().filter_map(|s| s.series.value_at(2020)).sum();
    assert_eq!(total_in, 90.0);
    assert_eq!(total_out, 90.0);
}

#[test]
fn axis_covers_scenario_series() {
    let historical = Series::from(vec![(2015, 100.0), (2016, 110.0)]);
    let trend = Series::from(vec![(2018, 90.0)]);
    let budget = Series::from(vec![(2015, 120.0), (2021, 60.0)]);
    let axis = build_axis([&historical, &trend, &budget], 2026);
    assert_eq!(axis.labels, vec![2015, 2016, 2017, 2018, 2019, 2020, 2021]);
}

#[test]
fn routing_falls_back_when_dataset_is_unknown() {
    let state = state();
    let route = state
        .resolve_route("Konsumtionen", DataView::SECONDARY.as_str())
        .unwrap();
    assert_eq!(route.path, "/geografiskt/konsumtionen/karta");

    assert!(state.resolve_route("Okänt", "lista").is_none());
    let fallback = state.default_route().unwrap();
    assert_eq!(fallback.dataset.key, "Utsläppen");
}

#[test]
fn registry_is_shareable_across_threads() {
    let registry = std::sync::Arc::new(KeyRegistry::build(["Utsläppen", "Elbilarna"]).unwrap());
    let handles: Vec<_> = ["UTSLÄPPEN", "utslappen", "Utsläppen"]
        .into_iter()
        .map(|candidate| {
            let registry = std::sync::Arc::clone(&registry);
            std::thread::spawn(move || registry.is_valid(candidate).map(str::to_string))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().as_deref(), Some("Utsläppen"));
    }
    assert_eq!(normalize("Utsläppen"), "utslappen");
}

#[test]
fn empty_sector_list_yields_no_sectors() {
    let sectors: Vec<SectorSeries> = Vec::new();
    assert!(aggregate_sectors(&sectors).is_empty());
}
