//! Resource-based policies for cross-account model import

use super::Timestamp;

shape! {
    /// Request of `PutResourcePolicy`.
    pub struct PutResourcePolicyRequest => PutResourcePolicyRequestBuilder {
        /// ARN of the custom model
        resource_arn: String,
        /// Policy document as JSON text
        resource_policy: String,
        /// Revision the caller expects to replace
        policy_revision_id: String,
    }
}

shape! {
    /// Response of `PutResourcePolicy`.
    pub struct PutResourcePolicyResponse => PutResourcePolicyResponseBuilder {
        /// Revision of the stored policy
        policy_revision_id: String,
    }
}

shape! {
    /// Request of `DescribeResourcePolicy`.
    pub struct DescribeResourcePolicyRequest => DescribeResourcePolicyRequestBuilder {
        /// ARN of the custom model
        resource_arn: String,
    }
}

shape! {
    /// Response of `DescribeResourcePolicy`.
    pub struct DescribeResourcePolicyResponse => DescribeResourcePolicyResponseBuilder {
        /// Policy document as JSON text
        resource_policy: String,
        /// When the policy was created
        creation_time: Timestamp,
        /// When the policy was last changed
        last_modified_time: Timestamp,
        /// Current revision
        policy_revision_id: String,
    }
}

shape! {
    /// Request of `DeleteResourcePolicy`.
    pub struct DeleteResourcePolicyRequest => DeleteResourcePolicyRequestBuilder {
        /// ARN of the custom model
        resource_arn: String,
        /// Revision the caller expects to delete
        policy_revision_id: String,
    }
}

shape! {
    /// Response of `DeleteResourcePolicy`.
    pub struct DeleteResourcePolicyResponse => DeleteResourcePolicyResponseBuilder {}
}
