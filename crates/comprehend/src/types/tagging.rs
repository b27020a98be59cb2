//! Resource tags

use super::Tag;

shape! {
    /// Request of `TagResource`.
    pub struct TagResourceRequest => TagResourceRequestBuilder {
        /// ARN of the resource to tag
        resource_arn: String,
        /// Tags to add or overwrite
        tags: Vec<Tag>,
    }
}

shape! {
    /// Response of `TagResource`.
    pub struct TagResourceResponse => TagResourceResponseBuilder {}
}

shape! {
    /// Request of `UntagResource`.
    pub struct UntagResourceRequest => UntagResourceRequestBuilder {
        /// ARN of the resource
        resource_arn: String,
        /// Keys of the tags to remove
        tag_keys: Vec<String>,
    }
}

shape! {
    /// Response of `UntagResource`.
    pub struct UntagResourceResponse => UntagResourceResponseBuilder {}
}

shape! {
    /// Request of `ListTagsForResource`.
    pub struct ListTagsForResourceRequest => ListTagsForResourceRequestBuilder {
        /// ARN of the resource
        resource_arn: String,
    }
}

shape! {
    /// Response of `ListTagsForResource`.
    pub struct ListTagsForResourceResponse => ListTagsForResourceResponseBuilder {
        /// ARN of the resource
        resource_arn: String,
        /// Tags on the resource
        tags: Vec<Tag>,
    }
}

impl ListTagsForResourceResponse {
    /// Value of the tag with `key`.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .flatten()
            .find(|tag| tag.key.as_deref() == Some(key))
            .and_then(|tag| tag.value.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_lookup() {
        let response: ListTagsForResourceResponse = serde_json::from_str(
            r#"{"ResourceArn": "arn:x", "Tags": [{"Key": "team", "Value": "nlp"}, {"Key": "env"}]}"#,
        )
        .unwrap();

        assert_eq!(response.tag("team"), Some("nlp"));
        assert_eq!(response.tag("env"), None);
        assert_eq!(response.tag("missing"), None);
    }

    #[test]
    fn test_untag_body() {
        let request = UntagResourceRequest::builder()
            .resource_arn("arn:x")
            .tag_keys(vec!["team".to_string()])
            .build()
            .unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"ResourceArn": "arn:x", "TagKeys": ["team"]})
        );
    }
}
