//! Custom entity recognizers

use super::{
    AugmentedManifestsListItem, InputFormat, LanguageCode, ModelStatus, Tag, Timestamp,
    TrainingDataFormat, VpcConfig,
};

shape! {
    /// An entity type the recognizer is trained on.
    pub struct EntityTypesListItem => EntityTypesListItemBuilder {
        /// Entity type label, e.g. `ENGINE_PART`
        #[serde(rename = "Type")]
        entity_type: String,
    }
}

impl EntityTypesListItem {
    /// Create an entity type entry.
    pub fn new(entity_type: impl Into<String>) -> Self {
        Self {
            entity_type: Some(entity_type.into()),
        }
    }
}

shape! {
    /// Training and test documents.
    pub struct EntityRecognizerDocuments => EntityRecognizerDocumentsBuilder {
        /// S3 location of training documents
        s3_uri: String,
        /// S3 location of test documents
        test_s3_uri: String,
        /// Layout of the document files
        input_format: InputFormat,
    }
}

shape! {
    /// Annotation files locating entities in the documents.
    pub struct EntityRecognizerAnnotations => EntityRecognizerAnnotationsBuilder {
        /// S3 location of training annotations
        s3_uri: String,
        /// S3 location of test annotations
        test_s3_uri: String,
    }
}

shape! {
    /// List of known entities, an alternative to annotations.
    pub struct EntityRecognizerEntityList => EntityRecognizerEntityListBuilder {
        /// S3 location of the entity list
        s3_uri: String,
    }
}

shape! {
    /// Training data of an entity recognizer.
    pub struct EntityRecognizerInputDataConfig => EntityRecognizerInputDataConfigBuilder {
        /// Layout of the training data
        data_format: TrainingDataFormat,
        /// Entity types to recognize
        entity_types: Vec<EntityTypesListItem>,
        /// Training documents
        documents: EntityRecognizerDocuments,
        /// Annotations
        annotations: EntityRecognizerAnnotations,
        /// Entity list
        entity_list: EntityRecognizerEntityList,
        /// Augmented manifests, for `AUGMENTED_MANIFEST` data
        augmented_manifests: Vec<AugmentedManifestsListItem>,
    }
}

shape! {
    /// Output location of an entity recognizer.
    pub struct EntityRecognizerOutputDataConfig => EntityRecognizerOutputDataConfigBuilder {
        /// S3 prefix of flywheel statistics
        flywheel_stats_s3_prefix: String,
    }
}

shape! {
    /// Quality metrics of a trained recognizer.
    pub struct EntityRecognizerEvaluationMetrics => EntityRecognizerEvaluationMetricsBuilder {
        /// Precision
        precision: f64,
        /// Recall
        recall: f64,
        /// F1 score
        #[serde(rename = "F1Score")]
        f1_score: f64,
    }
}

shape! {
    /// Per-type training statistics.
    pub struct EntityRecognizerMetadataEntityTypesListItem => EntityRecognizerMetadataEntityTypesListItemBuilder {
        /// Entity type label
        #[serde(rename = "Type")]
        entity_type: String,
        /// Quality metrics for this type
        evaluation_metrics: EntityRecognizerEvaluationMetrics,
        /// Mentions of this type in the training data
        number_of_train_mentions: i32,
    }
}

shape! {
    /// Training statistics of a recognizer.
    pub struct EntityRecognizerMetadata => EntityRecognizerMetadataBuilder {
        /// Documents used for training
        number_of_trained_documents: i32,
        /// Documents used for testing
        number_of_test_documents: i32,
        /// Overall quality metrics
        evaluation_metrics: EntityRecognizerEvaluationMetrics,
        /// Per-type statistics
        entity_types: Vec<EntityRecognizerMetadataEntityTypesListItem>,
    }
}

shape! {
    /// Everything known about an entity recognizer version.
    pub struct EntityRecognizerProperties => EntityRecognizerPropertiesBuilder {
        /// Recognizer ARN
        entity_recognizer_arn: String,
        /// Language of the training data
        language_code: LanguageCode,
        /// Training status
        status: ModelStatus,
        /// Failure or warning detail
        message: String,
        /// When training was submitted
        submit_time: Timestamp,
        /// When training finished
        end_time: Timestamp,
        /// When the training container started
        training_start_time: Timestamp,
        /// When the training container stopped
        training_end_time: Timestamp,
        /// Training data
        input_data_config: EntityRecognizerInputDataConfig,
        /// Training statistics
        recognizer_metadata: EntityRecognizerMetadata,
        /// Role granting access to the data
        data_access_role_arn: String,
        /// KMS key of the training volume
        volume_kms_key_id: String,
        /// VPC of the training job
        vpc_config: VpcConfig,
        /// KMS key of the trained model
        model_kms_key_id: String,
        /// Version name
        version_name: String,
        /// ARN of the model this one was imported from
        source_model_arn: String,
        /// Flywheel that manages this model
        flywheel_arn: String,
        /// Output location
        output_data_config: EntityRecognizerOutputDataConfig,
    }
}

shape! {
    /// Filter for `ListEntityRecognizers`.
    pub struct EntityRecognizerFilter => EntityRecognizerFilterBuilder {
        /// Only recognizers with this status
        status: ModelStatus,
        /// Only recognizers with this name
        recognizer_name: String,
        /// Only recognizers submitted before this time
        submit_time_before: Timestamp,
        /// Only recognizers submitted after this time
        submit_time_after: Timestamp,
    }
}

shape! {
    /// Request of `CreateEntityRecognizer`.
    pub struct CreateEntityRecognizerRequest => CreateEntityRecognizerRequestBuilder {
        /// Recognizer name
        recognizer_name: String,
        /// Version name
        version_name: String,
        /// Role granting access to the training data
        data_access_role_arn: String,
        /// Tags for the recognizer
        tags: Vec<Tag>,
        /// Training data
        input_data_config: EntityRecognizerInputDataConfig,
        /// Idempotency token chosen by the caller
        client_request_token: String,
        /// Language of the training data
        language_code: LanguageCode,
        /// KMS key of the training volume
        volume_kms_key_id: String,
        /// VPC of the training job
        vpc_config: VpcConfig,
        /// KMS key of the trained model
        model_kms_key_id: String,
        /// Resource policy for cross-account import
        model_policy: String,
    }
}

shape! {
    /// Response of `CreateEntityRecognizer`.
    pub struct CreateEntityRecognizerResponse => CreateEntityRecognizerResponseBuilder {
        /// ARN of the new recognizer
        entity_recognizer_arn: String,
    }
}

shape! {
    /// Request of `DescribeEntityRecognizer`.
    pub struct DescribeEntityRecognizerRequest => DescribeEntityRecognizerRequestBuilder {
        /// Recognizer ARN
        entity_recognizer_arn: String,
    }
}

shape! {
    /// Response of `DescribeEntityRecognizer`.
    pub struct DescribeEntityRecognizerResponse => DescribeEntityRecognizerResponseBuilder {
        /// Recognizer properties
        entity_recognizer_properties: EntityRecognizerProperties,
    }
}

shape! {
    /// Request of `ListEntityRecognizers`.
    pub struct ListEntityRecognizersRequest => ListEntityRecognizersRequestBuilder {
        /// Filter
        filter: EntityRecognizerFilter,
        /// Token from the previous page
        next_token: String,
        /// Page size
        max_results: i32,
    }
}

shape! {
    /// Response of `ListEntityRecognizers`.
    pub struct ListEntityRecognizersResponse => ListEntityRecognizersResponseBuilder {
        /// Recognizers on this page
        entity_recognizer_properties_list: Vec<EntityRecognizerProperties>,
        /// Token for the next page
        next_token: String,
    }
}

paginated!(
    ListEntityRecognizersRequest => ListEntityRecognizersResponse,
    entity_recognizer_properties_list: EntityRecognizerProperties
);

shape! {
    /// Request of `DeleteEntityRecognizer`.
    pub struct DeleteEntityRecognizerRequest => DeleteEntityRecognizerRequestBuilder {
        /// Recognizer ARN
        entity_recognizer_arn: String,
    }
}

shape! {
    /// Response of `DeleteEntityRecognizer`.
    pub struct DeleteEntityRecognizerResponse => DeleteEntityRecognizerResponseBuilder {}
}

shape! {
    /// Request of `StopTrainingEntityRecognizer`.
    pub struct StopTrainingEntityRecognizerRequest => StopTrainingEntityRecognizerRequestBuilder {
        /// Recognizer ARN
        entity_recognizer_arn: String,
    }
}

shape! {
    /// Response of `StopTrainingEntityRecognizer`.
    pub struct StopTrainingEntityRecognizerResponse => StopTrainingEntityRecognizerResponseBuilder {}
}
