//! Asynchronous analysis jobs
//!
//! Every job family has a `Start`, `Describe` and `List` operation; all but
//! document classification and topic modeling also have a `Stop`. The
//! records shared by the `Describe`/`List`/`Stop` operations are generated by
//! `job_queries!` and `stop_job!`; the `Start` requests and the property
//! records differ per family and are written out.

use super::{
    InputDataConfig, JobStatus, LanguageCode, OutputDataConfig, PiiEntityType, Tag, Timestamp,
    VpcConfig,
};

/// Describe and List records of one job family.
macro_rules! job_queries {
    (
        $family:literal,
        $props:ty,
        describe: $dreq:ident => $dreqb:ident, $dres:ident => $dresb:ident { $dfield:ident },
        list: $lreq:ident => $lreqb:ident, $lres:ident => $lresb:ident { $lfield:ident } $(,)?
    ) => {
        shape! {
            #[doc = concat!("Request of `Describe", $family, "`.")]
            pub struct $dreq => $dreqb {
                #[doc = "Job id returned by the start call"]
                job_id: String,
            }
        }

        shape! {
            #[doc = concat!("Response of `Describe", $family, "`.")]
            pub struct $dres => $dresb {
                #[doc = "Job properties"]
                $dfield: $props,
            }
        }

        impl $dres {
            /// Last status the service reported, if any.
            pub fn job_status(&self) -> Option<&JobStatus> {
                self.$dfield.as_ref().and_then(|props| props.job_status.as_ref())
            }
        }

        shape! {
            #[doc = concat!("Request of `List", $family, "s`.")]
            pub struct $lreq => $lreqb {
                #[doc = "Filter"]
                filter: JobFilter,
                #[doc = "Token from the previous page"]
                next_token: String,
                #[doc = "Page size"]
                max_results: i32,
            }
        }

        shape! {
            #[doc = concat!("Response of `List", $family, "s`.")]
            pub struct $lres => $lresb {
                #[doc = "Jobs on this page"]
                $lfield: Vec<$props>,
                #[doc = "Token for the next page"]
                next_token: String,
            }
        }

        paginated!($lreq => $lres, $lfield: $props);
    };
}

/// Stop records of one job family.
macro_rules! stop_job {
    ($family:literal, $req:ident => $reqb:ident, $res:ident => $resb:ident $(,)?) => {
        shape! {
            #[doc = concat!("Request of `Stop", $family, "`.")]
            pub struct $req => $reqb {
                #[doc = "Job id"]
                job_id: String,
            }
        }

        shape! {
            #[doc = concat!("Response of `Stop", $family, "`.")]
            pub struct $res => $resb {
                #[doc = "Job id"]
                job_id: String,
                #[doc = "Status after the stop, normally `STOP_REQUESTED`"]
                job_status: JobStatus,
            }
        }
    };
}

/// Response of every `Start*Job` operation without extra members.
macro_rules! start_response {
    ($family:literal, $res:ident => $resb:ident) => {
        shape! {
            #[doc = concat!("Response of `Start", $family, "`.")]
            pub struct $res => $resb {
                #[doc = "Id of the new job"]
                job_id: String,
                #[doc = "ARN of the new job"]
                job_arn: String,
                #[doc = "Initial status, normally `SUBMITTED`"]
                job_status: JobStatus,
            }
        }
    };
}

shape! {
    /// Filter shared by every `List*Jobs` operation.
    pub struct JobFilter => JobFilterBuilder {
        /// Only jobs with this name
        job_name: String,
        /// Only jobs in this state
        job_status: JobStatus,
        /// Only jobs submitted before this time
        submit_time_before: Timestamp,
        /// Only jobs submitted after this time
        submit_time_after: Timestamp,
    }
}

impl JobFilter {
    /// Match jobs in one state.
    pub fn with_status(status: JobStatus) -> Self {
        Self {
            job_status: Some(status),
            ..Default::default()
        }
    }
}

// Document classification

shape! {
    /// Everything known about a document classification job.
    pub struct DocumentClassificationJobProperties => DocumentClassificationJobPropertiesBuilder {
        /// Job id
        job_id: String,
        /// Job ARN
        job_arn: String,
        /// Job name
        job_name: String,
        /// Status
        job_status: JobStatus,
        /// Failure detail
        message: String,
        /// When the job was submitted
        submit_time: Timestamp,
        /// When the job finished
        end_time: Timestamp,
        /// Classifier used
        document_classifier_arn: String,
        /// Input location
        input_data_config: InputDataConfig,
        /// Output location
        output_data_config: OutputDataConfig,
        /// Role granting access to the data
        data_access_role_arn: String,
        /// KMS key of the processing volume
        volume_kms_key_id: String,
        /// VPC of the job
        vpc_config: VpcConfig,
        /// Flywheel whose active model was used
        flywheel_arn: String,
    }
}

shape! {
    /// Request of `StartDocumentClassificationJob`.
    pub struct StartDocumentClassificationJobRequest => StartDocumentClassificationJobRequestBuilder {
        /// Job name
        job_name: String,
        /// Classifier to use
        document_classifier_arn: String,
        /// Input location
        input_data_config: InputDataConfig,
        /// Output location
        output_data_config: OutputDataConfig,
        /// Role granting access to the data
        data_access_role_arn: String,
        /// Idempotency token chosen by the caller
        client_request_token: String,
        /// KMS key of the processing volume
        volume_kms_key_id: String,
        /// VPC of the job
        vpc_config: VpcConfig,
        /// Tags for the job
        tags: Vec<Tag>,
        /// Flywheel whose active model to use
        flywheel_arn: String,
    }
}

shape! {
    /// Response of `StartDocumentClassificationJob`.
    pub struct StartDocumentClassificationJobResponse => StartDocumentClassificationJobResponseBuilder {
        /// Id of the new job
        job_id: String,
        /// ARN of the new job
        job_arn: String,
        /// Initial status
        job_status: JobStatus,
        /// Classifier used
        document_classifier_arn: String,
    }
}

job_queries! {
    "DocumentClassificationJob",
    DocumentClassificationJobProperties,
    describe: DescribeDocumentClassificationJobRequest => DescribeDocumentClassificationJobRequestBuilder,
        DescribeDocumentClassificationJobResponse => DescribeDocumentClassificationJobResponseBuilder
        { document_classification_job_properties },
    list: ListDocumentClassificationJobsRequest => ListDocumentClassificationJobsRequestBuilder,
        ListDocumentClassificationJobsResponse => ListDocumentClassificationJobsResponseBuilder
        { document_classification_job_properties_list },
}

// Dominant language

shape! {
    /// Everything known about a dominant language detection job.
    pub struct DominantLanguageDetectionJobProperties => DominantLanguageDetectionJobPropertiesBuilder {
        /// Job id
        job_id: String,
        /// Job ARN
        job_arn: String,
        /// Job name
        job_name: String,
        /// Status
        job_status: JobStatus,
        /// Failure detail
        message: String,
        /// When the job was submitted
        submit_time: Timestamp,
        /// When the job finished
        end_time: Timestamp,
        /// Input location
        input_data_config: InputDataConfig,
        /// Output location
        output_data_config: OutputDataConfig,
        /// Role granting access to the data
        data_access_role_arn: String,
        /// KMS key of the processing volume
        volume_kms_key_id: String,
        /// VPC of the job
        vpc_config: VpcConfig,
    }
}

shape! {
    /// Request of `StartDominantLanguageDetectionJob`.
    pub struct StartDominantLanguageDetectionJobRequest => StartDominantLanguageDetectionJobRequestBuilder {
        /// Input location
        input_data_config: InputDataConfig,
        /// Output location
        output_data_config: OutputDataConfig,
        /// Role granting access to the data
        data_access_role_arn: String,
        /// Job name
        job_name: String,
        /// Idempotency token chosen by the caller
        client_request_token: String,
        /// KMS key of the processing volume
        volume_kms_key_id: String,
        /// VPC of the job
        vpc_config: VpcConfig,
        /// Tags for the job
        tags: Vec<Tag>,
    }
}

start_response!(
    "DominantLanguageDetectionJob",
    StartDominantLanguageDetectionJobResponse => StartDominantLanguageDetectionJobResponseBuilder
);

job_queries! {
    "DominantLanguageDetectionJob",
    DominantLanguageDetectionJobProperties,
    describe: DescribeDominantLanguageDetectionJobRequest => DescribeDominantLanguageDetectionJobRequestBuilder,
        DescribeDominantLanguageDetectionJobResponse => DescribeDominantLanguageDetectionJobResponseBuilder
        { dominant_language_detection_job_properties },
    list: ListDominantLanguageDetectionJobsRequest => ListDominantLanguageDetectionJobsRequestBuilder,
        ListDominantLanguageDetectionJobsResponse => ListDominantLanguageDetectionJobsResponseBuilder
        { dominant_language_detection_job_properties_list },
}

stop_job!(
    "DominantLanguageDetectionJob",
    StopDominantLanguageDetectionJobRequest => StopDominantLanguageDetectionJobRequestBuilder,
    StopDominantLanguageDetectionJobResponse => StopDominantLanguageDetectionJobResponseBuilder,
);

// Entities

shape! {
    /// Everything known about an entities detection job.
    pub struct EntitiesDetectionJobProperties => EntitiesDetectionJobPropertiesBuilder {
        /// Job id
        job_id: String,
        /// Job ARN
        job_arn: String,
        /// Job name
        job_name: String,
        /// Status
        job_status: JobStatus,
        /// Failure detail
        message: String,
        /// When the job was submitted
        submit_time: Timestamp,
        /// When the job finished
        end_time: Timestamp,
        /// Custom recognizer used, if any
        entity_recognizer_arn: String,
        /// Input location
        input_data_config: InputDataConfig,
        /// Output location
        output_data_config: OutputDataConfig,
        /// Language of the documents
        language_code: LanguageCode,
        /// Role granting access to the data
        data_access_role_arn: String,
        /// KMS key of the processing volume
        volume_kms_key_id: String,
        /// VPC of the job
        vpc_config: VpcConfig,
        /// Flywheel whose active model was used
        flywheel_arn: String,
    }
}

shape! {
    /// Request of `StartEntitiesDetectionJob`.
    pub struct StartEntitiesDetectionJobRequest => StartEntitiesDetectionJobRequestBuilder {
        /// Input location
        input_data_config: InputDataConfig,
        /// Output location
        output_data_config: OutputDataConfig,
        /// Role granting access to the data
        data_access_role_arn: String,
        /// Job name
        job_name: String,
        /// Custom recognizer to use instead of the built-in model
        entity_recognizer_arn: String,
        /// Language of the documents
        language_code: LanguageCode,
        /// Idempotency token chosen by the caller
        client_request_token: String,
        /// KMS key of the processing volume
        volume_kms_key_id: String,
        /// VPC of the job
        vpc_config: VpcConfig,
        /// Tags for the job
        tags: Vec<Tag>,
        /// Flywheel whose active model to use
        flywheel_arn: String,
    }
}

shape! {
    /// Response of `StartEntitiesDetectionJob`.
    pub struct StartEntitiesDetectionJobResponse => StartEntitiesDetectionJobResponseBuilder {
        /// Id of the new job
        job_id: String,
        /// ARN of the new job
        job_arn: String,
        /// Initial status
        job_status: JobStatus,
        /// Custom recognizer used
        entity_recognizer_arn: String,
    }
}

job_queries! {
    "EntitiesDetectionJob",
    EntitiesDetectionJobProperties,
    describe: DescribeEntitiesDetectionJobRequest => DescribeEntitiesDetectionJobRequestBuilder,
        DescribeEntitiesDetectionJobResponse => DescribeEntitiesDetectionJobResponseBuilder
        { entities_detection_job_properties },
    list: ListEntitiesDetectionJobsRequest => ListEntitiesDetectionJobsRequestBuilder,
        ListEntitiesDetectionJobsResponse => ListEntitiesDetectionJobsResponseBuilder
        { entities_detection_job_properties_list },
}

stop_job!(
    "EntitiesDetectionJob",
    StopEntitiesDetectionJobRequest => StopEntitiesDetectionJobRequestBuilder,
    StopEntitiesDetectionJobResponse => StopEntitiesDetectionJobResponseBuilder,
);

// Key phrases

shape! {
    /// Everything known about a key phrases detection job.
    pub struct KeyPhrasesDetectionJobProperties => KeyPhrasesDetectionJobPropertiesBuilder {
        /// Job id
        job_id: String,
        /// Job ARN
        job_arn: String,
        /// Job name
        job_name: String,
        /// Status
        job_status: JobStatus,
        /// Failure detail
        message: String,
        /// When the job was submitted
        submit_time: Timestamp,
        /// When the job finished
        end_time: Timestamp,
        /// Input location
        input_data_config: InputDataConfig,
        /// Output location
        output_data_config: OutputDataConfig,
        /// Language of the documents
        language_code: LanguageCode,
        /// Role granting access to the data
        data_access_role_arn: String,
        /// KMS key of the processing volume
        volume_kms_key_id: String,
        /// VPC of the job
        vpc_config: VpcConfig,
    }
}

shape! {
    /// Request of `StartKeyPhrasesDetectionJob`.
    pub struct StartKeyPhrasesDetectionJobRequest => StartKeyPhrasesDetectionJobRequestBuilder {
        /// Input location
        input_data_config: InputDataConfig,
        /// Output location
        output_data_config: OutputDataConfig,
        /// Role granting access to the data
        data_access_role_arn: String,
        /// Job name
        job_name: String,
        /// Language of the documents
        language_code: LanguageCode,
        /// Idempotency token chosen by the caller
        client_request_token: String,
        /// KMS key of the processing volume
        volume_kms_key_id: String,
        /// VPC of the job
        vpc_config: VpcConfig,
        /// Tags for the job
        tags: Vec<Tag>,
    }
}

start_response!(
    "KeyPhrasesDetectionJob",
    StartKeyPhrasesDetectionJobResponse => StartKeyPhrasesDetectionJobResponseBuilder
);

job_queries! {
    "KeyPhrasesDetectionJob",
    KeyPhrasesDetectionJobProperties,
    describe: DescribeKeyPhrasesDetectionJobRequest => DescribeKeyPhrasesDetectionJobRequestBuilder,
        DescribeKeyPhrasesDetectionJobResponse => DescribeKeyPhrasesDetectionJobResponseBuilder
        { key_phrases_detection_job_properties },
    list: ListKeyPhrasesDetectionJobsRequest => ListKeyPhrasesDetectionJobsRequestBuilder,
        ListKeyPhrasesDetectionJobsResponse => ListKeyPhrasesDetectionJobsResponseBuilder
        { key_phrases_detection_job_properties_list },
}

stop_job!(
    "KeyPhrasesDetectionJob",
    StopKeyPhrasesDetectionJobRequest => StopKeyPhrasesDetectionJobRequestBuilder,
    StopKeyPhrasesDetectionJobResponse => StopKeyPhrasesDetectionJobResponseBuilder,
);

// Sentiment

shape! {
    /// Everything known about a sentiment detection job.
    pub struct SentimentDetectionJobProperties => SentimentDetectionJobPropertiesBuilder {
        /// Job id
        job_id: String,
        /// Job ARN
        job_arn: String,
        /// Job name
        job_name: String,
        /// Status
        job_status: JobStatus,
        /// Failure detail
        message: String,
        /// When the job was submitted
        submit_time: Timestamp,
        /// When the job finished
        end_time: Timestamp,
        /// Input location
        input_data_config: InputDataConfig,
        /// Output location
        output_data_config: OutputDataConfig,
        /// Language of the documents
        language_code: LanguageCode,
        /// Role granting access to the data
        data_access_role_arn: String,
        /// KMS key of the processing volume
        volume_kms_key_id: String,
        /// VPC of the job
        vpc_config: VpcConfig,
    }
}

shape! {
    /// Request of `StartSentimentDetectionJob`.
    pub struct StartSentimentDetectionJobRequest => StartSentimentDetectionJobRequestBuilder {
        /// Input location
        input_data_config: InputDataConfig,
        /// Output location
        output_data_config: OutputDataConfig,
        /// Role granting access to the data
        data_access_role_arn: String,
        /// Job name
        job_name: String,
        /// Language of the documents
        language_code: LanguageCode,
        /// Idempotency token chosen by the caller
        client_request_token: String,
        /// KMS key of the processing volume
        volume_kms_key_id: String,
        /// VPC of the job
        vpc_config: VpcConfig,
        /// Tags for the job
        tags: Vec<Tag>,
    }
}

start_response!(
    "SentimentDetectionJob",
    StartSentimentDetectionJobResponse => StartSentimentDetectionJobResponseBuilder
);

job_queries! {
    "SentimentDetectionJob",
    SentimentDetectionJobProperties,
    describe: DescribeSentimentDetectionJobRequest => DescribeSentimentDetectionJobRequestBuilder,
        DescribeSentimentDetectionJobResponse => DescribeSentimentDetectionJobResponseBuilder
        { sentiment_detection_job_properties },
    list: ListSentimentDetectionJobsRequest => ListSentimentDetectionJobsRequestBuilder,
        ListSentimentDetectionJobsResponse => ListSentimentDetectionJobsResponseBuilder
        { sentiment_detection_job_properties_list },
}

stop_job!(
    "SentimentDetectionJob",
    StopSentimentDetectionJobRequest => StopSentimentDetectionJobRequestBuilder,
    StopSentimentDetectionJobResponse => StopSentimentDetectionJobResponseBuilder,
);

// Targeted sentiment

shape! {
    /// Everything known about a targeted sentiment detection job.
    pub struct TargetedSentimentDetectionJobProperties => TargetedSentimentDetectionJobPropertiesBuilder {
        /// Job id
        job_id: String,
        /// Job ARN
        job_arn: String,
        /// Job name
        job_name: String,
        /// Status
        job_status: JobStatus,
        /// Failure detail
        message: String,
        /// When the job was submitted
        submit_time: Timestamp,
        /// When the job finished
        end_time: Timestamp,
        /// Input location
        input_data_config: InputDataConfig,
        /// Output location
        output_data_config: OutputDataConfig,
        /// Language of the documents
        language_code: LanguageCode,
        /// Role granting access to the data
        data_access_role_arn: String,
        /// KMS key of the processing volume
        volume_kms_key_id: String,
        /// VPC of the job
        vpc_config: VpcConfig,
    }
}

shape! {
    /// Request of `StartTargetedSentimentDetectionJob`.
    pub struct StartTargetedSentimentDetectionJobRequest => StartTargetedSentimentDetectionJobRequestBuilder {
        /// Input location
        input_data_config: InputDataConfig,
        /// Output location
        output_data_config: OutputDataConfig,
        /// Role granting access to the data
        data_access_role_arn: String,
        /// Job name
        job_name: String,
        /// Language of the documents
        language_code: LanguageCode,
        /// Idempotency token chosen by the caller
        client_request_token: String,
        /// KMS key of the processing volume
        volume_kms_key_id: String,
        /// VPC of the job
        vpc_config: VpcConfig,
        /// Tags for the job
        tags: Vec<Tag>,
    }
}

start_response!(
    "TargetedSentimentDetectionJob",
    StartTargetedSentimentDetectionJobResponse => StartTargetedSentimentDetectionJobResponseBuilder
);

job_queries! {
    "TargetedSentimentDetectionJob",
    TargetedSentimentDetectionJobProperties,
    describe: DescribeTargetedSentimentDetectionJobRequest => DescribeTargetedSentimentDetectionJobRequestBuilder,
        DescribeTargetedSentimentDetectionJobResponse => DescribeTargetedSentimentDetectionJobResponseBuilder
        { targeted_sentiment_detection_job_properties },
    list: ListTargetedSentimentDetectionJobsRequest => ListTargetedSentimentDetectionJobsRequestBuilder,
        ListTargetedSentimentDetectionJobsResponse => ListTargetedSentimentDetectionJobsResponseBuilder
        { targeted_sentiment_detection_job_properties_list },
}

stop_job!(
    "TargetedSentimentDetectionJob",
    StopTargetedSentimentDetectionJobRequest => StopTargetedSentimentDetectionJobRequestBuilder,
    StopTargetedSentimentDetectionJobResponse => StopTargetedSentimentDetectionJobResponseBuilder,
);

// PII entities

string_enum! {
    /// Whether a PII job reports offsets or redacts documents.
    pub enum PiiEntitiesDetectionMode {
        /// Write redacted copies of the documents
        OnlyRedaction = "ONLY_REDACTION",
        /// Write entity offsets only
        OnlyOffsets = "ONLY_OFFSETS",
    }
}

string_enum! {
    /// How redacted PII is replaced.
    pub enum PiiEntitiesDetectionMaskMode {
        /// Replace each character with the mask character
        Mask = "MASK",
        /// Replace the entity with its type name
        ReplaceWithPiiEntityType = "REPLACE_WITH_PII_ENTITY_TYPE",
    }
}

shape! {
    /// Redaction settings of a PII job.
    pub struct RedactionConfig => RedactionConfigBuilder {
        /// Entity types to redact
        pii_entity_types: Vec<PiiEntityType>,
        /// Replacement strategy
        mask_mode: PiiEntitiesDetectionMaskMode,
        /// Character used by `MASK`
        mask_character: String,
    }
}

shape! {
    /// Output location reported for a PII job.
    pub struct PiiOutputDataConfig => PiiOutputDataConfigBuilder {
        /// S3 URI of the output
        s3_uri: String,
        /// KMS key used to encrypt the output
        kms_key_id: String,
    }
}

shape! {
    /// Everything known about a PII entities detection job.
    pub struct PiiEntitiesDetectionJobProperties => PiiEntitiesDetectionJobPropertiesBuilder {
        /// Job id
        job_id: String,
        /// Job ARN
        job_arn: String,
        /// Job name
        job_name: String,
        /// Status
        job_status: JobStatus,
        /// Failure detail
        message: String,
        /// When the job was submitted
        submit_time: Timestamp,
        /// When the job finished
        end_time: Timestamp,
        /// Input location
        input_data_config: InputDataConfig,
        /// Output location
        output_data_config: PiiOutputDataConfig,
        /// Redaction settings
        redaction_config: RedactionConfig,
        /// Language of the documents
        language_code: LanguageCode,
        /// Role granting access to the data
        data_access_role_arn: String,
        /// Offsets or redaction
        mode: PiiEntitiesDetectionMode,
    }
}

shape! {
    /// Request of `StartPiiEntitiesDetectionJob`.
    pub struct StartPiiEntitiesDetectionJobRequest => StartPiiEntitiesDetectionJobRequestBuilder {
        /// Input location
        input_data_config: InputDataConfig,
        /// Output location
        output_data_config: OutputDataConfig,
        /// Offsets or redaction
        mode: PiiEntitiesDetectionMode,
        /// Redaction settings, required with `ONLY_REDACTION`
        redaction_config: RedactionConfig,
        /// Role granting access to the data
        data_access_role_arn: String,
        /// Job name
        job_name: String,
        /// Language of the documents
        language_code: LanguageCode,
        /// Idempotency token chosen by the caller
        client_request_token: String,
        /// Tags for the job
        tags: Vec<Tag>,
    }
}

start_response!(
    "PiiEntitiesDetectionJob",
    StartPiiEntitiesDetectionJobResponse => StartPiiEntitiesDetectionJobResponseBuilder
);

job_queries! {
    "PiiEntitiesDetectionJob",
    PiiEntitiesDetectionJobProperties,
    describe: DescribePiiEntitiesDetectionJobRequest => DescribePiiEntitiesDetectionJobRequestBuilder,
        DescribePiiEntitiesDetectionJobResponse => DescribePiiEntitiesDetectionJobResponseBuilder
        { pii_entities_detection_job_properties },
    list: ListPiiEntitiesDetectionJobsRequest => ListPiiEntitiesDetectionJobsRequestBuilder,
        ListPiiEntitiesDetectionJobsResponse => ListPiiEntitiesDetectionJobsResponseBuilder
        { pii_entities_detection_job_properties_list },
}

stop_job!(
    "PiiEntitiesDetectionJob",
    StopPiiEntitiesDetectionJobRequest => StopPiiEntitiesDetectionJobRequestBuilder,
    StopPiiEntitiesDetectionJobResponse => StopPiiEntitiesDetectionJobResponseBuilder,
);

// Topics

shape! {
    /// Everything known about a topic modeling job.
    pub struct TopicsDetectionJobProperties => TopicsDetectionJobPropertiesBuilder {
        /// Job id
        job_id: String,
        /// Job ARN
        job_arn: String,
        /// Job name
        job_name: String,
        /// Status
        job_status: JobStatus,
        /// Failure detail
        message: String,
        /// When the job was submitted
        submit_time: Timestamp,
        /// When the job finished
        end_time: Timestamp,
        /// Input location
        input_data_config: InputDataConfig,
        /// Output location
        output_data_config: OutputDataConfig,
        /// Number of topics requested
        number_of_topics: i32,
        /// Role granting access to the data
        data_access_role_arn: String,
        /// KMS key of the processing volume
        volume_kms_key_id: String,
        /// VPC of the job
        vpc_config: VpcConfig,
    }
}

shape! {
    /// Request of `StartTopicsDetectionJob`.
    pub struct StartTopicsDetectionJobRequest => StartTopicsDetectionJobRequestBuilder {
        /// Input location
        input_data_config: InputDataConfig,
        /// Output location
        output_data_config: OutputDataConfig,
        /// Role granting access to the data
        data_access_role_arn: String,
        /// Job name
        job_name: String,
        /// Number of topics to find, 1 to 100
        number_of_topics: i32,
        /// Idempotency token chosen by the caller
        client_request_token: String,
        /// KMS key of the processing volume
        volume_kms_key_id: String,
        /// VPC of the job
        vpc_config: VpcConfig,
        /// Tags for the job
        tags: Vec<Tag>,
    }
}

start_response!(
    "TopicsDetectionJob",
    StartTopicsDetectionJobResponse => StartTopicsDetectionJobResponseBuilder
);

job_queries! {
    "TopicsDetectionJob",
    TopicsDetectionJobProperties,
    describe: DescribeTopicsDetectionJobRequest => DescribeTopicsDetectionJobRequestBuilder,
        DescribeTopicsDetectionJobResponse => DescribeTopicsDetectionJobResponseBuilder
        { topics_detection_job_properties },
    list: ListTopicsDetectionJobsRequest => ListTopicsDetectionJobsRequestBuilder,
        ListTopicsDetectionJobsResponse => ListTopicsDetectionJobsResponseBuilder
        { topics_detection_job_properties_list },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Paginated;

    #[test]
    fn test_describe_exposes_status() {
        let response: DescribeSentimentDetectionJobResponse = serde_json::from_str(
            r#"{"SentimentDetectionJobProperties": {
                "JobId": "job-1",
                "JobStatus": "IN_PROGRESS",
                "SubmitTime": 1700000000,
                "LanguageCode": "en"
            }}"#,
        )
        .unwrap();

        assert_eq!(response.job_status(), Some(&JobStatus::InProgress));
        assert_eq!(DescribeSentimentDetectionJobResponse::default().job_status(), None);
    }

    #[test]
    fn test_list_filter_serializes() {
        let request = ListEntitiesDetectionJobsRequest::builder()
            .filter(JobFilter::with_status(JobStatus::Completed))
            .max_results(10)
            .build()
            .unwrap();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"Filter": {"JobStatus": "COMPLETED"}, "MaxResults": 10})
        );
    }

    #[test]
    fn test_list_page() {
        let page: ListTopicsDetectionJobsResponse = serde_json::from_str(
            r#"{"TopicsDetectionJobPropertiesList": [{"JobId": "a"}, {"JobId": "b"}], "NextToken": "t"}"#,
        )
        .unwrap();

        assert_eq!(page.items().len(), 2);
        assert_eq!(page.next_token(), Some("t"));
    }

    #[test]
    fn test_pii_request_shape() {
        let request = StartPiiEntitiesDetectionJobRequest::builder()
            .input_data_config(InputDataConfig::s3("s3://in/"))
            .output_data_config(OutputDataConfig::s3("s3://out/"))
            .mode(PiiEntitiesDetectionMode::OnlyRedaction)
            .redaction_config(
                RedactionConfig::builder()
                    .mask_mode(PiiEntitiesDetectionMaskMode::Mask)
                    .mask_character("*")
                    .build()
                    .unwrap(),
            )
            .data_access_role_arn("arn:aws:iam::111122223333:role/comprehend")
            .language_code(LanguageCode::En)
            .build()
            .unwrap();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["Mode"], "ONLY_REDACTION");
        assert_eq!(json["RedactionConfig"]["MaskMode"], "MASK");
        assert_eq!(json["InputDataConfig"]["S3Uri"], "s3://in/");
    }
}
