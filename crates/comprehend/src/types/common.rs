//! Enums and records shared by several operation families

string_enum! {
    /// Language of the input documents.
    pub enum LanguageCode {
        /// English
        En = "en",
        /// Spanish
        Es = "es",
        /// French
        Fr = "fr",
        /// German
        De = "de",
        /// Italian
        It = "it",
        /// Portuguese
        Pt = "pt",
        /// Arabic
        Ar = "ar",
        /// Hindi
        Hi = "hi",
        /// Japanese
        Ja = "ja",
        /// Korean
        Ko = "ko",
        /// Simplified Chinese
        Zh = "zh",
        /// Traditional Chinese
        ZhTw = "zh-TW",
    }
}

string_enum! {
    /// Languages supported by syntax analysis.
    pub enum SyntaxLanguageCode {
        /// English
        En = "en",
        /// Spanish
        Es = "es",
        /// French
        Fr = "fr",
        /// German
        De = "de",
        /// Italian
        It = "it",
        /// Portuguese
        Pt = "pt",
    }
}

string_enum! {
    /// Overall sentiment of a text.
    pub enum SentimentType {
        /// Positive
        Positive = "POSITIVE",
        /// Negative
        Negative = "NEGATIVE",
        /// Neutral
        Neutral = "NEUTRAL",
        /// Both positive and negative
        Mixed = "MIXED",
    }
}

string_enum! {
    /// Status of an asynchronous analysis job.
    ///
    /// See [`crate::lifecycle`] for the transitions between states.
    pub enum JobStatus {
        /// Accepted, not started yet
        Submitted = "SUBMITTED",
        /// Processing documents
        InProgress = "IN_PROGRESS",
        /// Finished successfully
        Completed = "COMPLETED",
        /// Finished; some documents could not be processed
        PartialSuccess = "PARTIAL_SUCCESS",
        /// Finished with an error
        Failed = "FAILED",
        /// A stop was requested and is being honoured
        StopRequested = "STOP_REQUESTED",
        /// Stopped before completion
        Stopped = "STOPPED",
    }
}

string_enum! {
    /// Status of a custom model (classifier or recognizer) version.
    pub enum ModelStatus {
        /// Accepted, not started yet
        Submitted = "SUBMITTED",
        /// Training
        Training = "TRAINING",
        /// Being deleted
        Deleting = "DELETING",
        /// A stop was requested
        StopRequested = "STOP_REQUESTED",
        /// Training stopped
        Stopped = "STOPPED",
        /// Training failed
        InError = "IN_ERROR",
        /// Trained and usable
        Trained = "TRAINED",
        /// Trained, with warnings about the training data
        TrainedWithWarning = "TRAINED_WITH_WARNING",
    }
}

string_enum! {
    /// Format of the input documents of a job.
    pub enum InputFormat {
        /// Each file is one document
        OneDocPerFile = "ONE_DOC_PER_FILE",
        /// Each line of each file is one document
        OneDocPerLine = "ONE_DOC_PER_LINE",
    }
}

string_enum! {
    /// How text is extracted from image and PDF documents.
    pub enum DocumentReadAction {
        /// Plain text detection
        TextractDetectDocumentText = "TEXTRACT_DETECT_DOCUMENT_TEXT",
        /// Document analysis
        TextractAnalyzeDocument = "TEXTRACT_ANALYZE_DOCUMENT",
    }
}

string_enum! {
    /// When extraction runs for PDF documents.
    pub enum DocumentReadMode {
        /// Use the service default
        ServiceDefault = "SERVICE_DEFAULT",
        /// Always run the configured read action
        ForceDocumentReadAction = "FORCE_DOCUMENT_READ_ACTION",
    }
}

string_enum! {
    /// Extra features of document analysis.
    pub enum DocumentReadFeatureTypes {
        /// Table extraction
        Tables = "TABLES",
        /// Form extraction
        Forms = "FORMS",
    }
}

shape! {
    /// A key/value tag attached to a resource.
    pub struct Tag => TagBuilder {
        /// Tag key
        key: String,
        /// Tag value
        value: String,
    }
}

impl Tag {
    /// Create a tag.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

shape! {
    /// Extraction settings for image and PDF input.
    pub struct DocumentReaderConfig => DocumentReaderConfigBuilder {
        /// Extraction API to use
        document_read_action: DocumentReadAction,
        /// When to run the extraction
        document_read_mode: DocumentReadMode,
        /// Extra analysis features
        feature_types: Vec<DocumentReadFeatureTypes>,
    }
}

shape! {
    /// Where an analysis job reads its documents.
    pub struct InputDataConfig => InputDataConfigBuilder {
        /// S3 URI of the input
        s3_uri: String,
        /// Layout of the input files
        input_format: InputFormat,
        /// Extraction settings for image and PDF input
        document_reader_config: DocumentReaderConfig,
    }
}

impl InputDataConfig {
    /// Read from an S3 prefix.
    pub fn s3(uri: impl Into<String>) -> Self {
        Self {
            s3_uri: Some(uri.into()),
            ..Default::default()
        }
    }
}

shape! {
    /// Where an analysis job writes its results.
    pub struct OutputDataConfig => OutputDataConfigBuilder {
        /// S3 URI of the output
        s3_uri: String,
        /// KMS key used to encrypt the output
        kms_key_id: String,
    }
}

impl OutputDataConfig {
    /// Write to an S3 prefix.
    pub fn s3(uri: impl Into<String>) -> Self {
        Self {
            s3_uri: Some(uri.into()),
            ..Default::default()
        }
    }
}

shape! {
    /// VPC that job and training containers run in.
    pub struct VpcConfig => VpcConfigBuilder {
        /// Security group ids
        security_group_ids: Vec<String>,
        /// Subnet ids
        subnets: Vec<String>,
    }
}

shape! {
    /// Confidence of each overall sentiment.
    pub struct SentimentScore => SentimentScoreBuilder {
        /// Positive score
        positive: f32,
        /// Negative score
        negative: f32,
        /// Neutral score
        neutral: f32,
        /// Mixed score
        mixed: f32,
    }
}

shape! {
    /// Error detail for one document of a batch call.
    pub struct BatchItemError => BatchItemErrorBuilder {
        /// Zero-based index of the document in the request
        index: i32,
        /// Error code
        error_code: String,
        /// Error message
        error_message: String,
    }
}

shape! {
    /// Per-document processing warning.
    pub struct WarningsListItem => WarningsListItemBuilder {
        /// Page number the warning applies to
        page: i32,
        /// Warning code
        warn_code: String,
        /// Warning message
        warn_message: String,
    }
}

shape! {
    /// Type and page count of an input document.
    pub struct DocumentMetadata => DocumentMetadataBuilder {
        /// Number of pages
        pages: i32,
        /// Characters extracted per page
        extracted_characters: Vec<ExtractedCharactersListItem>,
    }
}

shape! {
    /// Number of extracted characters on one page.
    pub struct ExtractedCharactersListItem => ExtractedCharactersListItemBuilder {
        /// Page number
        page: i32,
        /// Characters extracted from the page
        count: i32,
    }
}

shape! {
    /// Position of a detected item on a page.
    pub struct BlockReference => BlockReferenceBuilder {
        /// Block id
        block_id: String,
        /// Start offset within the block
        begin_offset: i32,
        /// End offset within the block
        end_offset: i32,
        /// Nested references
        child_blocks: Vec<ChildBlock>,
    }
}

shape! {
    /// A block nested in another.
    pub struct ChildBlock => ChildBlockBuilder {
        /// Block id
        child_block_id: String,
        /// Start offset within the parent
        begin_offset: i32,
        /// End offset within the parent
        end_offset: i32,
    }
}

/// Responses of `List*` operations that return one page at a time.
pub trait Paginated {
    /// Item type of one page
    type Item: Clone;

    /// Token for the next page, `None` on the last page.
    fn next_token(&self) -> Option<&str>;

    /// Items on this page.
    fn items(&self) -> &[Self::Item];
}

/// Requests of `List*` operations that accept a continuation token.
pub trait PageRequest: Clone {
    /// Set the token returned by the previous page.
    fn set_next_token(&mut self, token: Option<String>);
}
