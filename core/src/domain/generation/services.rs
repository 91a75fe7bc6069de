use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    generation::{
        entities::{GenerationRequest, GenerationResult},
        ports::GenerationService,
        value_objects::{GenerateInput, ProcessImageInput},
    },
};

impl Service {
    /// Exactly one oracle call per request, no retries.
    async fn call_oracle(&self, request: GenerationRequest) -> Result<GenerationResult, CoreError> {
        let pending = match request.image {
            Some(image) => {
                self.llm_client
                    .generate_with_image(request.prompt, image.data, image.mime_type)
            }
            None => self.llm_client.generate_with_text(request.prompt),
        };

        let generated = pending.await.map_err(|e| {
            tracing::error!(error = %e, "Oracle call failed");
            e
        })?;

        Ok(GenerationResult::new(generated))
    }
}

impl GenerationService for Service {
    #[instrument(skip(self, input))]
    async fn generate(&self, input: GenerateInput) -> Result<GenerationResult, CoreError> {
        let request = GenerationRequest::text(input.prompt)?;

        self.call_oracle(request).await
    }

    #[instrument(skip(self, input))]
    async fn process_image(&self, input: ProcessImageInput) -> Result<GenerationResult, CoreError> {
        let request =
            GenerationRequest::with_image(input.image, input.prompt, &self.image_mime_type)?;

        tracing::debug!(
            image_size = request.image.as_ref().map(|i| i.data.len()).unwrap_or_default(),
            "Forwarding image to oracle"
        );

        self.call_oracle(request).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use base64::{Engine as _, engine::general_purpose};

    use super::*;
    use crate::domain::generation::{
        IMAGE_AND_PROMPT_REQUIRED, PROMPT_REQUIRED, ports::MockLLMClient,
    };

    fn service(llm: MockLLMClient) -> Service {
        Service::new(Arc::new(llm), "image/jpeg")
    }

    fn text_input(prompt: &str) -> GenerateInput {
        GenerateInput {
            prompt: Some(prompt.to_string()),
        }
    }

    fn image_input(image: Option<&str>, prompt: Option<&str>) -> ProcessImageInput {
        ProcessImageInput {
            image: image.map(str::to_string),
            prompt: prompt.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_generate_forwards_prompt_verbatim() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .withf(|prompt| prompt == "  What is in a salad? ")
            .times(1)
            .returning(|_| Box::pin(async { Ok("Lettuce, mostly".to_string()) }));

        let result = service(llm)
            .generate(text_input("  What is in a salad? "))
            .await
            .unwrap();

        assert_eq!(result, GenerationResult::new("Lettuce, mostly"));
    }

    #[tokio::test]
    async fn test_generate_rejects_missing_or_empty_prompt() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().never();
        let service = service(llm);

        for input in [GenerateInput::default(), text_input("")] {
            let err = service.generate(input).await.unwrap_err();
            assert_eq!(err, CoreError::InvalidInput(PROMPT_REQUIRED.to_string()));
        }
    }

    #[tokio::test]
    async fn test_generate_surfaces_oracle_failure() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().times(1).returning(|_| {
            Box::pin(async { Err(CoreError::ExternalServiceError("quota".to_string())) })
        });

        let err = service(llm).generate(text_input("hi")).await.unwrap_err();
        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }

    #[tokio::test]
    async fn test_process_image_sends_decoded_image_and_prompt() {
        let image = general_purpose::STANDARD.encode([0xFF, 0xD8, 0xFF, 0xE0]);

        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .withf(|prompt, data, mime_type| {
                prompt == "Estimate macros"
                    && data == &vec![0xFF, 0xD8, 0xFF, 0xE0]
                    && mime_type == "image/jpeg"
            })
            .times(1)
            .returning(|_, _, _| Box::pin(async { Ok("Calories: 350 kcal".to_string()) }));

        let result = service(llm)
            .process_image(image_input(Some(&image), Some("Estimate macros")))
            .await
            .unwrap();

        assert_eq!(result.generated, "Calories: 350 kcal");
    }

    #[tokio::test]
    async fn test_process_image_accepts_data_url() {
        let image = format!(
            "data:image/jpeg;base64,{}",
            general_purpose::STANDARD.encode(b"jpeg")
        );

        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .withf(|_, data, _| data == b"jpeg")
            .times(1)
            .returning(|_, _, _| Box::pin(async { Ok("ok".to_string()) }));

        let result = service(llm)
            .process_image(image_input(Some(&image), Some("prompt")))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_process_image_requires_image_and_prompt() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image().never();
        llm.expect_generate_with_text().never();
        let service = service(llm);

        for input in [
            image_input(None, Some("prompt")),
            image_input(Some("aGVsbG8="), None),
            image_input(Some(""), Some("prompt")),
            image_input(Some("data:image/jpeg;base64,"), Some("prompt")),
            image_input(Some("   "), Some("prompt")),
            image_input(None, None),
        ] {
            let err = service.process_image(input).await.unwrap_err();
            assert_eq!(
                err,
                CoreError::InvalidInput(IMAGE_AND_PROMPT_REQUIRED.to_string())
            );
        }
    }

    #[tokio::test]
    async fn test_process_image_rejects_malformed_base64() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image().never();

        let err = service(llm)
            .process_image(image_input(Some("%%%"), Some("prompt")))
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }
}
