//! Real-time analysis of a single document

use super::{
    BlockReference, DocumentMetadata, DocumentReaderConfig, LanguageCode, SentimentScore,
    SentimentType, SyntaxLanguageCode, WarningsListItem,
};

string_enum! {
    /// Entity categories of the built-in recognizer.
    pub enum EntityType {
        /// A person
        Person = "PERSON",
        /// A location
        Location = "LOCATION",
        /// An organization
        Organization = "ORGANIZATION",
        /// A branded product
        CommercialItem = "COMMERCIAL_ITEM",
        /// An event
        Event = "EVENT",
        /// A date
        Date = "DATE",
        /// A quantity
        Quantity = "QUANTITY",
        /// A title of a work
        Title = "TITLE",
        /// Anything else
        Other = "OTHER",
    }
}

string_enum! {
    /// Kinds of personally identifiable information.
    pub enum PiiEntityType {
        /// Bank account number
        BankAccountNumber = "BANK_ACCOUNT_NUMBER",
        /// Bank routing number
        BankRouting = "BANK_ROUTING",
        /// Card number
        CreditDebitNumber = "CREDIT_DEBIT_NUMBER",
        /// Card verification code
        CreditDebitCvv = "CREDIT_DEBIT_CVV",
        /// Card expiry date
        CreditDebitExpiry = "CREDIT_DEBIT_EXPIRY",
        /// Personal identification number
        Pin = "PIN",
        /// Email address
        Email = "EMAIL",
        /// Physical address
        Address = "ADDRESS",
        /// Person name
        Name = "NAME",
        /// Phone number
        Phone = "PHONE",
        /// US social security number
        Ssn = "SSN",
        /// Date or time
        DateTime = "DATE_TIME",
        /// Passport number
        PassportNumber = "PASSPORT_NUMBER",
        /// Driver id
        DriverId = "DRIVER_ID",
        /// Web address
        Url = "URL",
        /// Age
        Age = "AGE",
        /// User name
        Username = "USERNAME",
        /// Password
        Password = "PASSWORD",
        /// AWS access key
        AwsAccessKey = "AWS_ACCESS_KEY",
        /// AWS secret key
        AwsSecretKey = "AWS_SECRET_KEY",
        /// IP address
        IpAddress = "IP_ADDRESS",
        /// MAC address
        MacAddress = "MAC_ADDRESS",
        /// Every type
        All = "ALL",
        /// License plate
        LicensePlate = "LICENSE_PLATE",
        /// Vehicle identification number
        VehicleIdentificationNumber = "VEHICLE_IDENTIFICATION_NUMBER",
        /// UK national insurance number
        UkNationalInsuranceNumber = "UK_NATIONAL_INSURANCE_NUMBER",
        /// Canadian social insurance number
        CaSocialInsuranceNumber = "CA_SOCIAL_INSURANCE_NUMBER",
        /// US individual taxpayer id
        UsIndividualTaxIdentificationNumber = "US_INDIVIDUAL_TAX_IDENTIFICATION_NUMBER",
        /// UK unique taxpayer reference
        UkUniqueTaxpayerReferenceNumber = "UK_UNIQUE_TAXPAYER_REFERENCE_NUMBER",
        /// Indian permanent account number
        InPermanentAccountNumber = "IN_PERMANENT_ACCOUNT_NUMBER",
        /// Indian NREGA number
        InNrega = "IN_NREGA",
        /// IBAN
        InternationalBankAccountNumber = "INTERNATIONAL_BANK_ACCOUNT_NUMBER",
        /// SWIFT code
        SwiftCode = "SWIFT_CODE",
        /// UK NHS number
        UkNationalHealthServiceNumber = "UK_NATIONAL_HEALTH_SERVICE_NUMBER",
        /// Canadian health number
        CaHealthNumber = "CA_HEALTH_NUMBER",
        /// Indian Aadhaar number
        InAadhaar = "IN_AADHAAR",
        /// Indian voter id
        InVoterNumber = "IN_VOTER_NUMBER",
    }
}

string_enum! {
    /// Universal part-of-speech tags.
    pub enum PartOfSpeechTagType {
        /// Adjective
        Adj = "ADJ",
        /// Adposition
        Adp = "ADP",
        /// Adverb
        Adv = "ADV",
        /// Auxiliary
        Aux = "AUX",
        /// Coordinating conjunction
        Conj = "CONJ",
        /// Coordinating conjunction
        Cconj = "CCONJ",
        /// Determiner
        Det = "DET",
        /// Interjection
        Intj = "INTJ",
        /// Noun
        Noun = "NOUN",
        /// Numeral
        Num = "NUM",
        /// Other
        O = "O",
        /// Particle
        Part = "PART",
        /// Pronoun
        Pron = "PRON",
        /// Proper noun
        Propn = "PROPN",
        /// Punctuation
        Punct = "PUNCT",
        /// Subordinating conjunction
        Sconj = "SCONJ",
        /// Symbol
        Sym = "SYM",
        /// Verb
        Verb = "VERB",
    }
}

string_enum! {
    /// Entity categories of targeted sentiment.
    pub enum TargetedSentimentEntityType {
        /// A person
        Person = "PERSON",
        /// A location
        Location = "LOCATION",
        /// An organization
        Organization = "ORGANIZATION",
        /// A facility
        Facility = "FACILITY",
        /// A brand
        Brand = "BRAND",
        /// A branded product
        CommercialItem = "COMMERCIAL_ITEM",
        /// A movie
        Movie = "MOVIE",
        /// A piece of music
        Music = "MUSIC",
        /// A book
        Book = "BOOK",
        /// Software
        Software = "SOFTWARE",
        /// A game
        Game = "GAME",
        /// A personal title
        PersonalTitle = "PERSONAL_TITLE",
        /// An event
        Event = "EVENT",
        /// A date
        Date = "DATE",
        /// A quantity
        Quantity = "QUANTITY",
        /// An attribute of another entity
        Attribute = "ATTRIBUTE",
        /// Anything else
        Other = "OTHER",
    }
}

shape! {
    /// A language detected in a text.
    pub struct DominantLanguage => DominantLanguageBuilder {
        /// RFC 5646 language code
        language_code: String,
        /// Confidence
        score: f32,
    }
}

shape! {
    /// A named entity found in a text.
    pub struct Entity => EntityBuilder {
        /// Confidence
        score: f32,
        /// Entity category; custom recognizers return their own labels
        #[serde(rename = "Type")]
        entity_type: EntityType,
        /// Entity text
        text: String,
        /// Character offset of the first character
        begin_offset: i32,
        /// Character offset after the last character
        end_offset: i32,
        /// Positions on the page, for image and PDF input
        block_references: Vec<BlockReference>,
    }
}

shape! {
    /// A key phrase found in a text.
    pub struct KeyPhrase => KeyPhraseBuilder {
        /// Confidence
        score: f32,
        /// Phrase text
        text: String,
        /// Character offset of the first character
        begin_offset: i32,
        /// Character offset after the last character
        end_offset: i32,
    }
}

shape! {
    /// Part of speech of a token.
    pub struct PartOfSpeechTag => PartOfSpeechTagBuilder {
        /// Tag
        tag: PartOfSpeechTagType,
        /// Confidence
        score: f32,
    }
}

shape! {
    /// A word with its part of speech.
    pub struct SyntaxToken => SyntaxTokenBuilder {
        /// Position of the token in the text
        token_id: i32,
        /// Token text
        text: String,
        /// Character offset of the first character
        begin_offset: i32,
        /// Character offset after the last character
        end_offset: i32,
        /// Part of speech
        part_of_speech: PartOfSpeechTag,
    }
}

shape! {
    /// Sentiment expressed towards one mention.
    pub struct MentionSentiment => MentionSentimentBuilder {
        /// Sentiment
        sentiment: SentimentType,
        /// Confidence of each sentiment
        sentiment_score: SentimentScore,
    }
}

shape! {
    /// One mention of a targeted-sentiment entity.
    pub struct TargetedSentimentMention => TargetedSentimentMentionBuilder {
        /// Confidence that this is an entity
        score: f32,
        /// Confidence that this mention belongs to the group
        group_score: f32,
        /// Mention text
        text: String,
        /// Entity category
        #[serde(rename = "Type")]
        entity_type: TargetedSentimentEntityType,
        /// Sentiment towards this mention
        mention_sentiment: MentionSentiment,
        /// Character offset of the first character
        begin_offset: i32,
        /// Character offset after the last character
        end_offset: i32,
    }
}

shape! {
    /// An entity and every mention of it.
    pub struct TargetedSentimentEntity => TargetedSentimentEntityBuilder {
        /// Indexes into `mentions` of the most descriptive mentions
        descriptive_mention_index: Vec<i32>,
        /// Mentions of the entity
        mentions: Vec<TargetedSentimentMention>,
    }
}

shape! {
    /// A PII entity with its location.
    pub struct PiiEntity => PiiEntityBuilder {
        /// Confidence
        score: f32,
        /// PII type
        #[serde(rename = "Type")]
        entity_type: PiiEntityType,
        /// Character offset of the first character
        begin_offset: i32,
        /// Character offset after the last character
        end_offset: i32,
    }
}

shape! {
    /// A PII type present in a text, without location.
    pub struct EntityLabel => EntityLabelBuilder {
        /// PII type
        name: PiiEntityType,
        /// Confidence
        score: f32,
    }
}

shape! {
    /// A class assigned by a custom classifier.
    pub struct DocumentClass => DocumentClassBuilder {
        /// Class name
        name: String,
        /// Confidence
        score: f32,
        /// Page number, for multi-page input
        page: i32,
    }
}

shape! {
    /// A label assigned by a multi-label classifier.
    pub struct DocumentLabel => DocumentLabelBuilder {
        /// Label name
        name: String,
        /// Confidence
        score: f32,
        /// Page number, for multi-page input
        page: i32,
    }
}

shape! {
    /// A page that could not be processed.
    pub struct ErrorsListElement => ErrorsListElementBuilder {
        /// Page number
        page: i32,
        /// Error code
        error_code: String,
        /// Error message
        error_message: String,
    }
}

shape! {
    /// Request of `DetectDominantLanguage`.
    pub struct DetectDominantLanguageRequest => DetectDominantLanguageRequestBuilder {
        /// UTF-8 text, at most 100 KB
        text: String,
    }
}

shape! {
    /// Response of `DetectDominantLanguage`.
    pub struct DetectDominantLanguageResponse => DetectDominantLanguageResponseBuilder {
        /// Detected languages, most likely first
        languages: Vec<DominantLanguage>,
    }
}

shape! {
    /// Request of `DetectEntities`.
    ///
    /// Either `text` or `bytes` is given. With `endpoint_arn` a custom
    /// recognizer endpoint is used and `language_code` is ignored.
    pub struct DetectEntitiesRequest => DetectEntitiesRequestBuilder {
        /// UTF-8 text
        text: String,
        /// Language of the text
        language_code: LanguageCode,
        /// Custom recognizer endpoint
        endpoint_arn: String,
        /// Base64 encoded document (PDF, Word or image)
        bytes: String,
        /// Extraction settings for `bytes`
        document_reader_config: DocumentReaderConfig,
    }
}

shape! {
    /// Response of `DetectEntities`.
    pub struct DetectEntitiesResponse => DetectEntitiesResponseBuilder {
        /// Detected entities
        entities: Vec<Entity>,
        /// Page information for document input
        document_metadata: DocumentMetadata,
        /// Pages that failed
        errors: Vec<ErrorsListElement>,
    }
}

shape! {
    /// Request of `DetectKeyPhrases`.
    pub struct DetectKeyPhrasesRequest => DetectKeyPhrasesRequestBuilder {
        /// UTF-8 text
        text: String,
        /// Language of the text
        language_code: LanguageCode,
    }
}

shape! {
    /// Response of `DetectKeyPhrases`.
    pub struct DetectKeyPhrasesResponse => DetectKeyPhrasesResponseBuilder {
        /// Detected phrases
        key_phrases: Vec<KeyPhrase>,
    }
}

shape! {
    /// Request of `DetectSentiment`.
    pub struct DetectSentimentRequest => DetectSentimentRequestBuilder {
        /// UTF-8 text, at most 5 KB
        text: String,
        /// Language of the text
        language_code: LanguageCode,
    }
}

shape! {
    /// Response of `DetectSentiment`.
    pub struct DetectSentimentResponse => DetectSentimentResponseBuilder {
        /// Prevailing sentiment
        sentiment: SentimentType,
        /// Confidence of each sentiment
        sentiment_score: SentimentScore,
    }
}

shape! {
    /// Request of `DetectSyntax`.
    pub struct DetectSyntaxRequest => DetectSyntaxRequestBuilder {
        /// UTF-8 text
        text: String,
        /// Language of the text
        language_code: SyntaxLanguageCode,
    }
}

shape! {
    /// Response of `DetectSyntax`.
    pub struct DetectSyntaxResponse => DetectSyntaxResponseBuilder {
        /// Tokens in text order
        syntax_tokens: Vec<SyntaxToken>,
    }
}

shape! {
    /// Request of `DetectTargetedSentiment`.
    pub struct DetectTargetedSentimentRequest => DetectTargetedSentimentRequestBuilder {
        /// UTF-8 text
        text: String,
        /// Language of the text
        language_code: LanguageCode,
    }
}

shape! {
    /// Response of `DetectTargetedSentiment`.
    pub struct DetectTargetedSentimentResponse => DetectTargetedSentimentResponseBuilder {
        /// Entities with the sentiment towards each mention
        entities: Vec<TargetedSentimentEntity>,
    }
}

shape! {
    /// Request of `DetectPiiEntities`.
    pub struct DetectPiiEntitiesRequest => DetectPiiEntitiesRequestBuilder {
        /// UTF-8 text
        text: String,
        /// Language of the text
        language_code: LanguageCode,
    }
}

shape! {
    /// Response of `DetectPiiEntities`.
    pub struct DetectPiiEntitiesResponse => DetectPiiEntitiesResponseBuilder {
        /// Detected PII entities
        entities: Vec<PiiEntity>,
    }
}

shape! {
    /// Request of `ContainsPiiEntities`.
    pub struct ContainsPiiEntitiesRequest => ContainsPiiEntitiesRequestBuilder {
        /// UTF-8 text
        text: String,
        /// Language of the text
        language_code: LanguageCode,
    }
}

shape! {
    /// Response of `ContainsPiiEntities`.
    pub struct ContainsPiiEntitiesResponse => ContainsPiiEntitiesResponseBuilder {
        /// PII types present in the text
        labels: Vec<EntityLabel>,
    }
}

shape! {
    /// Request of `ClassifyDocument`.
    pub struct ClassifyDocumentRequest => ClassifyDocumentRequestBuilder {
        /// UTF-8 text
        text: String,
        /// Classifier endpoint
        endpoint_arn: String,
        /// Base64 encoded document (PDF, Word or image)
        bytes: String,
        /// Extraction settings for `bytes`
        document_reader_config: DocumentReaderConfig,
    }
}

shape! {
    /// Response of `ClassifyDocument`.
    pub struct ClassifyDocumentResponse => ClassifyDocumentResponseBuilder {
        /// Classes, for multi-class classifiers
        classes: Vec<DocumentClass>,
        /// Labels, for multi-label classifiers
        labels: Vec<DocumentLabel>,
        /// Page information for document input
        document_metadata: DocumentMetadata,
        /// Pages that failed
        errors: Vec<ErrorsListElement>,
        /// Warnings about the input
        warnings: Vec<WarningsListItem>,
    }
}

impl DetectDominantLanguageResponse {
    /// The most likely language, if any was detected.
    pub fn top_language(&self) -> Option<&DominantLanguage> {
        self.languages.as_deref()?.iter().max_by(|a, b| {
            a.score
                .unwrap_or_default()
                .total_cmp(&b.score.unwrap_or_default())
        })
    }
}

impl ClassifyDocumentResponse {
    /// The highest scoring class, if any.
    pub fn top_class(&self) -> Option<&DocumentClass> {
        self.classes.as_deref()?.iter().max_by(|a, b| {
            a.score
                .unwrap_or_default()
                .total_cmp(&b.score.unwrap_or_default())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_entity_wire_names() {
        let entity: Entity = serde_json::from_str(
            r#"{"Score":0.99,"Type":"PERSON","Text":"Jane","BeginOffset":0,"EndOffset":4}"#,
        )
        .unwrap();
        assert_eq!(entity.entity_type, Some(EntityType::Person));
        assert_eq!(entity.end_offset, Some(4));
    }

    #[test]
    fn test_custom_entity_label_is_kept() {
        let entity: Entity = serde_json::from_str(r#"{"Type":"ENGINE_PART"}"#).unwrap();
        assert_eq!(
            entity.entity_type,
            Some(EntityType::Unknown("ENGINE_PART".to_string()))
        );
    }

    #[test]
    fn test_top_language() {
        let response: DetectDominantLanguageResponse = serde_json::from_str(
            r#"{"Languages":[{"LanguageCode":"fr","Score":0.2},{"LanguageCode":"en","Score":0.8}]}"#,
        )
        .unwrap();
        assert_eq!(
            response.top_language().and_then(|l| l.language_code.as_deref()),
            Some("en")
        );
        assert!(DetectDominantLanguageResponse::default().top_language().is_none());
    }

    #[test]
    fn test_request_serialization() {
        let request = DetectEntitiesRequest::builder()
            .text("Jane lives in Seattle")
            .language_code(LanguageCode::En)
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"Text": "Jane lives in Seattle", "LanguageCode": "en"})
        );
    }
}
