use serde_json::Value;
use stix_objects::*;

#[test]
fn appending_n_objects_yields_n_entries_in_order() {
    let mut bundle = new_bundle();
    let mut ids = Vec::new();
    for n in 0..25 {
        let mut campaign = Campaign::new("2.0");
        campaign.name.set(format!("campaign {n}"));
        ids.push(campaign.id().unwrap().clone());
        bundle.add_object(campaign);
    }
    assert_eq!(bundle.len(), 25);

    let json: Value = serde_json::from_slice(&bundle.to_vec().unwrap()).unwrap();
    let objects = json["objects"].as_array().unwrap();
    assert_eq!(objects.len(), 25);
    for (object, id) in objects.iter().zip(&ids) {
        assert_eq!(object["id"], id.as_str());
    }
}

#[test]
fn heterogeneous_bundle_round_trips() {
    let mut bundle = Bundle::new();

    let mut campaign = Campaign::new("2.0");
    campaign.name.set("Bank Attack 2016");
    campaign.objective.set("Compromise SWIFT system and steal money");

    let mut indicator = Indicator::new("2.0");
    indicator.name.set("Malware C2 Indicator 2016");
    indicator.description.set(
        "This indicator should detect the SpyEye malware by looking for this MD5 hash",
    );
    indicator.set_pattern("file-object:hashes.md5 = 84714c100d2dfc88629531f6456b8276");

    let mut infra = Infrastructure::new("2.0");
    infra.name.set("SpyEye Command and Control Servers");
    infra
        .kill_chain_phases
        .add("lockheed-martin-cyber-kill-chain", "command-and-control");

    let relationship = Relationship::between(
        "2.0",
        indicator.id().unwrap().clone(),
        "indicates",
        campaign.id().unwrap().clone(),
    );
    let marking = new_marking_definition("2.0", "amber");

    bundle.add_object(campaign);
    bundle.add_object(indicator);
    bundle.add_object(infra);
    bundle.add_object(relationship);
    bundle.add_object(marking);

    let first = bundle.to_json().unwrap();
    let decoded = Bundle::from_json(&first).unwrap();
    assert_eq!(decoded, bundle);
    assert_eq!(decoded.id(), bundle.id());
    assert_eq!(decoded.to_json().unwrap(), first);

    let types: Vec<&str> = decoded.objects().iter().map(StixObject::object_type).collect();
    assert_eq!(
        types,
        ["campaign", "indicator", "infrastructure", "relationship", "marking-definition"]
    );
}

#[test]
fn unknown_objects_survive_a_round_trip() {
    let text = r#"{"type":"bundle","id":"bundle--5d0092c5-5f74-4287-9642-33f4c354e56d","objects":[{"id":"x-acme--1","name":"w","type":"x-acme"}]}"#;
    let bundle = Bundle::from_json(text).unwrap();
    assert!(matches!(bundle.objects()[0], StixObject::Other(_)));
    assert_eq!(bundle.to_json().unwrap(), text);
}

#[test]
fn bundle_identifiers_are_unique() {
    let a = Bundle::new();
    let b = Bundle::new();
    assert_ne!(a.id(), b.id());
    assert_eq!(a.id().unwrap().object_type(), BUNDLE_TYPE);
}
