//! Custom document classifiers

use super::{LanguageCode, ModelStatus, Tag, Timestamp, VpcConfig};

string_enum! {
    /// Layout of classifier or recognizer training data.
    pub enum TrainingDataFormat {
        /// CSV files in the native format
        ComprehendCsv = "COMPREHEND_CSV",
        /// SageMaker Ground Truth augmented manifests
        AugmentedManifest = "AUGMENTED_MANIFEST",
    }
}

string_enum! {
    /// Whether a classifier assigns one class or several labels.
    pub enum DocumentClassifierMode {
        /// One class per document
        MultiClass = "MULTI_CLASS",
        /// Any number of labels per document
        MultiLabel = "MULTI_LABEL",
    }
}

string_enum! {
    /// Kind of training documents.
    pub enum DocumentType {
        /// Plain text documents
        PlainTextDocument = "PLAIN_TEXT_DOCUMENT",
        /// Semi-structured documents (PDF, Word, images)
        SemiStructuredDocument = "SEMI_STRUCTURED_DOCUMENT",
    }
}

string_enum! {
    /// Whether a manifest holds training or test data.
    pub enum Split {
        /// Training data
        Train = "TRAIN",
        /// Test data
        Test = "TEST",
    }
}

shape! {
    /// One augmented manifest of training data.
    pub struct AugmentedManifestsListItem => AugmentedManifestsListItemBuilder {
        /// S3 location of the manifest
        s3_uri: String,
        /// Training or test split
        split: Split,
        /// Label attributes to use
        attribute_names: Vec<String>,
        /// S3 prefix of annotation files
        annotation_data_s3_uri: String,
        /// S3 prefix of source documents
        source_documents_s3_uri: String,
        /// Kind of documents
        document_type: DocumentType,
    }
}

shape! {
    /// Training data of a document classifier.
    pub struct DocumentClassifierInputDataConfig => DocumentClassifierInputDataConfigBuilder {
        /// Layout of the training data
        data_format: TrainingDataFormat,
        /// S3 location of the training CSV
        s3_uri: String,
        /// S3 location of the test CSV
        test_s3_uri: String,
        /// Separator between labels in multi-label mode
        label_delimiter: String,
        /// Augmented manifests, for `AUGMENTED_MANIFEST` data
        augmented_manifests: Vec<AugmentedManifestsListItem>,
        /// Kind of training documents
        document_type: DocumentType,
    }
}

shape! {
    /// Output location of a document classifier.
    pub struct DocumentClassifierOutputDataConfig => DocumentClassifierOutputDataConfigBuilder {
        /// S3 location of the confusion matrix
        s3_uri: String,
        /// KMS key used to encrypt the output
        kms_key_id: String,
        /// S3 prefix of flywheel statistics
        flywheel_stats_s3_prefix: String,
    }
}

shape! {
    /// Quality metrics of a trained classifier.
    pub struct ClassifierEvaluationMetrics => ClassifierEvaluationMetricsBuilder {
        /// Fraction of correct predictions
        accuracy: f64,
        /// Precision
        precision: f64,
        /// Recall
        recall: f64,
        /// F1 score
        #[serde(rename = "F1Score")]
        f1_score: f64,
        /// Micro-averaged precision
        micro_precision: f64,
        /// Micro-averaged recall
        micro_recall: f64,
        /// Micro-averaged F1 score
        #[serde(rename = "MicroF1Score")]
        micro_f1_score: f64,
        /// Hamming loss, multi-label only
        hamming_loss: f64,
    }
}

shape! {
    /// Training statistics of a classifier.
    pub struct ClassifierMetadata => ClassifierMetadataBuilder {
        /// Number of labels
        number_of_labels: i32,
        /// Documents used for training
        number_of_trained_documents: i32,
        /// Documents used for testing
        number_of_test_documents: i32,
        /// Quality metrics
        evaluation_metrics: ClassifierEvaluationMetrics,
    }
}

shape! {
    /// Everything known about a document classifier version.
    pub struct DocumentClassifierProperties => DocumentClassifierPropertiesBuilder {
        /// Classifier ARN
        document_classifier_arn: String,
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
        input_data_config: DocumentClassifierInputDataConfig,
        /// Output location
        output_data_config: DocumentClassifierOutputDataConfig,
        /// Training statistics
        classifier_metadata: ClassifierMetadata,
        /// Role granting access to the data
        data_access_role_arn: String,
        /// KMS key of the training volume
        volume_kms_key_id: String,
        /// VPC of the training job
        vpc_config: VpcConfig,
        /// Class or label mode
        mode: DocumentClassifierMode,
        /// KMS key of the trained model
        model_kms_key_id: String,
        /// Version name
        version_name: String,
        /// ARN of the model this one was imported from
        source_model_arn: String,
        /// Flywheel that manages this model
        flywheel_arn: String,
    }
}

shape! {
    /// Filter for `ListDocumentClassifiers`.
    pub struct DocumentClassifierFilter => DocumentClassifierFilterBuilder {
        /// Only classifiers with this status
        status: ModelStatus,
        /// Only classifiers with this name
        document_classifier_name: String,
        /// Only classifiers submitted before this time
        submit_time_before: Timestamp,
        /// Only classifiers submitted after this time
        submit_time_after: Timestamp,
    }
}

shape! {
    /// Request of `CreateDocumentClassifier`.
    pub struct CreateDocumentClassifierRequest => CreateDocumentClassifierRequestBuilder {
        /// Classifier name
        document_classifier_name: String,
        /// Version name
        version_name: String,
        /// Role granting access to the training data
        data_access_role_arn: String,
        /// Tags for the classifier
        tags: Vec<Tag>,
        /// Training data
        input_data_config: DocumentClassifierInputDataConfig,
        /// Output location
        output_data_config: DocumentClassifierOutputDataConfig,
        /// Idempotency token chosen by the caller
        client_request_token: String,
        /// Language of the training data
        language_code: LanguageCode,
        /// KMS key of the training volume
        volume_kms_key_id: String,
        /// VPC of the training job
        vpc_config: VpcConfig,
        /// Class or label mode
        mode: DocumentClassifierMode,
        /// KMS key of the trained model
        model_kms_key_id: String,
        /// Resource policy for cross-account import
        model_policy: String,
    }
}

shape! {
    /// Response of `CreateDocumentClassifier`.
    pub struct CreateDocumentClassifierResponse => CreateDocumentClassifierResponseBuilder {
        /// ARN of the new classifier
        document_classifier_arn: String,
    }
}

shape! {
    /// Request of `DescribeDocumentClassifier`.
    pub struct DescribeDocumentClassifierRequest => DescribeDocumentClassifierRequestBuilder {
        /// Classifier ARN
        document_classifier_arn: String,
    }
}

shape! {
    /// Response of `DescribeDocumentClassifier`.
    pub struct DescribeDocumentClassifierResponse => DescribeDocumentClassifierResponseBuilder {
        /// Classifier properties
        document_classifier_properties: DocumentClassifierProperties,
    }
}

shape! {
    /// Request of `ListDocumentClassifiers`.
    pub struct ListDocumentClassifiersRequest => ListDocumentClassifiersRequestBuilder {
        /// Filter
        filter: DocumentClassifierFilter,
        /// Token from the previous page
        next_token: String,
        /// Page size
        max_results: i32,
    }
}

shape! {
    /// Response of `ListDocumentClassifiers`.
    pub struct ListDocumentClassifiersResponse => ListDocumentClassifiersResponseBuilder {
        /// Classifiers on this page
        document_classifier_properties_list: Vec<DocumentClassifierProperties>,
        /// Token for the next page
        next_token: String,
    }
}

paginated!(
    ListDocumentClassifiersRequest => ListDocumentClassifiersResponse,
    document_classifier_properties_list: DocumentClassifierProperties
);

shape! {
    /// Request of `DeleteDocumentClassifier`.
    pub struct DeleteDocumentClassifierRequest => DeleteDocumentClassifierRequestBuilder {
        /// Classifier ARN
        document_classifier_arn: String,
    }
}

shape! {
    /// Response of `DeleteDocumentClassifier`.
    pub struct DeleteDocumentClassifierResponse => DeleteDocumentClassifierResponseBuilder {}
}

shape! {
    /// Request of `StopTrainingDocumentClassifier`.
    pub struct StopTrainingDocumentClassifierRequest => StopTrainingDocumentClassifierRequestBuilder {
        /// Classifier ARN
        document_classifier_arn: String,
    }
}

shape! {
    /// Response of `StopTrainingDocumentClassifier`.
    pub struct StopTrainingDocumentClassifierResponse => StopTrainingDocumentClassifierResponseBuilder {}
}
