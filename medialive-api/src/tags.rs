//! Tagging of arbitrary resources by ARN.

use crate::*;

api_model! {
    /// Adds tags to a resource.
    pub struct CreateTagsRequest {
        /// Amazon Resource Name of the tagged resource. Sent in the request
        /// path.
        resource_arn: String,
        tags: Tags,
    }
}

impl_tags!(CreateTagsRequest);

api_model! {
    /// Removes tags from a resource.
    pub struct DeleteTagsRequest {
        /// Amazon Resource Name of the tagged resource. Sent in the request
        /// path.
        resource_arn: String,
        /// An array of tag keys to delete. Sent as repeated query parameters.
        tag_keys: Vec<String>,
    }
}

api_model! {
    /// Reads the tags of a resource.
    pub struct ListTagsForResourceRequest {
        /// Amazon Resource Name of the tagged resource. Sent in the request
        /// path.
        resource_arn: String,
    }
}

api_model! {
    pub struct ListTagsForResourceResult {
        tags: Tags,
    }
}

impl DeleteTagsRequest {
    /// Appends a single key to `tag_keys`.
    pub fn add_tag_key(mut self, key: impl Into<String>) -> Self {
        self.tag_keys.get_or_insert_with(Vec::new).push(key.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_keys() {
        let from_calls = DeleteTagsRequest::default()
            .resource_arn("arn:aws:medialive:us-west-2:123456789012:channel:1")
            .add_tag_key("team")
            .add_tag_key("env");
        let from_array = DeleteTagsRequest::default()
            .resource_arn("arn:aws:medialive:us-west-2:123456789012:channel:1")
            .tag_keys(["team".to_owned(), "env".to_owned()]);
        assert_eq!(from_calls, from_array);
    }

    #[test]
    fn test_create_tags() {
        let mut request = CreateTagsRequest::default().resource_arn("arn:aws:medialive:1");
        request.add_tags_entry("team", "news").unwrap();
        assert_eq!(
            request.tags.as_ref().and_then(|tags| tags.get("team")).cloned(),
            Some("news".to_owned())
        );
        assert!(request.add_tags_entry("team", "sports").is_err());
        assert_eq!(
            request.tags.as_ref().and_then(|tags| tags.get("team")).cloned(),
            Some("news".to_owned())
        );
        assert_eq!(request.resource_arn.as_deref(), Some("arn:aws:medialive:1"));
    }

    #[test]
    fn test_list_tags_result() {
        let result: ListTagsForResourceResult =
            serde_json::from_str(r#"{"tags": {"env": "prod", "team": "news"}}"#).unwrap();
        let expected = Tags::from([
            ("env".to_owned(), "prod".to_owned()),
            ("team".to_owned(), "news".to_owned()),
        ]);
        assert_eq!(result, ListTagsForResourceResult::default().tags(expected));
    }
}
