use serde_json::{json, Value};

/// Two variants of a title plus a block list nested inside an invariant value.
pub fn content_document() -> Value {
    json!({
        "values": [
            {"alias": "title", "culture": null, "segment": null, "value": "Invariant"},
            {"alias": "title", "culture": "en-US", "segment": null, "value": "English"},
            {"alias": "title", "culture": "da-DK", "segment": "vip", "value": "Dansk VIP"},
            {
                "alias": "contentBlocks",
                "culture": null,
                "segment": null,
                "value": {
                    "layout": {"items": ["block-1", "block-2"]},
                    "contentData": [
                        {
                            "key": "block-1",
                            "values": [
                                {"alias": "headline", "culture": null, "segment": null, "value": "Block 1 Headline"}
                            ]
                        },
                        {
                            "key": "block-2",
                            "values": [
                                {"alias": "headline", "culture": null, "segment": null, "value": "Block 2 Headline"}
                            ]
                        }
                    ]
                }
            }
        ]
    })
}
