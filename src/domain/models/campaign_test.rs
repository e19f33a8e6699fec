use anyhow::Result;
use test_utils::campaign_fixture;

use super::Campaign;

#[test]
fn it_deserializes_from_the_wire_format() -> Result<()> {
    let campaign: Campaign = serde_json::from_str(campaign_fixture())?;

    assert_eq!(campaign.id, "camp_9f8e7d6c");
    assert_eq!(campaign.kind, "cart_abandonment");
    assert_eq!(campaign.confidence, 0.85);
    assert_eq!(campaign.payload["objective"], "cart_abandonment");
    assert_eq!(campaign.payload["audience"]["segment"], "cart_abandoners_24h");

    return Ok(());
}

#[test]
fn it_calculates_confidence_percent() -> Result<()> {
    let mut campaign: Campaign = serde_json::from_str(campaign_fixture())?;
    assert_eq!(campaign.confidence_percent(), 85);

    campaign.confidence = 1.7;
    assert_eq!(campaign.confidence_percent(), 100);

    campaign.confidence = -0.3;
    assert_eq!(campaign.confidence_percent(), 0);

    return Ok(());
}

#[test]
fn it_formats_a_summary() -> Result<()> {
    let campaign: Campaign = serde_json::from_str(campaign_fixture())?;
    assert_eq!(campaign.summary(), "cart_abandonment · 85% confidence");

    return Ok(());
}

#[test]
fn it_pretty_prints_the_payload() -> Result<()> {
    let campaign: Campaign = serde_json::from_str(campaign_fixture())?;
    let pretty = campaign.payload_pretty()?;

    assert!(pretty.contains("\"objective\": \"cart_abandonment\""));

    let reparsed: serde_json::Value = serde_json::from_str(&pretty)?;
    assert_eq!(reparsed, campaign.payload);

    return Ok(());
}
