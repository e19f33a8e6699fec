pub fn campaign_fixture() -> &'static str {
    return r#"{
  "id": "camp_9f8e7d6c",
  "type": "cart_abandonment",
  "confidence": 0.85,
  "createdAt": "2025-11-04T19:00:00+00:00",
  "jsonPayload": {
    "campaign_id": "camp_9f8e7d6c",
    "timestamp": "2025-11-04T19:00:00+00:00",
    "objective": "cart_abandonment",
    "audience": {
      "segment": "cart_abandoners_24h",
      "size": 214,
      "demographics": {
        "age": "25-34",
        "gender": "female",
        "location": "US"
      }
    },
    "channels": {
      "primary": "email",
      "secondary": ["sms"],
      "reasoning": "High open rates for abandoned cart recovery"
    },
    "message": {
      "email": {
        "subject": "Still thinking about your items?",
        "content": "Complete your purchase and get 10% off your order!",
        "cta": "Complete Purchase"
      },
      "sms": {
        "content": "Your cart expires in 2 hours! Complete your purchase now: [link]"
      }
    },
    "timing": {
      "send_time": "2025-11-04T21:00:00+00:00",
      "timezone": "user_local",
      "reasoning": "Strike while interest is still high"
    },
    "data_sources": ["shopify"],
    "performance_estimate": {
      "reach": 214,
      "open_rate": 0.231,
      "click_rate": 0.028,
      "conversion_rate": 0.082
    },
    "confidence_score": 0.85
  }
}"#;
}

pub fn chat_response_fixture() -> String {
    let campaign = campaign_fixture();
    return format!(
        r#"{{
  "response": "I found 214 customers who abandoned their carts in the last 24 hours. I've created an email recovery campaign with 85% confidence that will help recover lost sales.",
  "campaigns": [{campaign}],
  "processing_time": 1450
}}"#
    );
}
