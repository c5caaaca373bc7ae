    use super::*;

    fn endpoints() -> ProvidersConfig {
        ProvidersConfig::default()
    }

    #[test]
    fn test_select_openai_default_model() {
        let settings = Settings::default().with_key(Provider::OpenAi, "sk-test");
        let strategy = WireStrategy::select(&settings, &endpoints()).unwrap();
        assert_eq!(
            strategy,
            WireStrategy::OpenAiCompatible {
                endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
                api_key: "sk-test".to_string(),
                model: "gpt-4o-mini".to_string(),
            }
        );
    }

    #[test]
    fn test_select_missing_key() {
        let settings = Settings::default().with_provider(Provider::Gemini);
        let result = WireStrategy::select(&settings, &endpoints());
        assert!(matches!(result, Err(ProviderError::MissingCredential(p)) if p == "gemini"));
    }

    #[test]
    fn test_select_blank_key_is_missing() {
        let settings = Settings::default()
            .with_provider(Provider::DeepSeek)
            .with_key(Provider::DeepSeek, "");
        assert!(WireStrategy::select(&settings, &endpoints()).is_err());
    }

    #[test]
    fn test_select_deepseek_uses_openai_shape() {
        let settings = Settings::default()
            .with_provider(Provider::DeepSeek)
            .with_key(Provider::DeepSeek, "ds-key");
        let strategy = WireStrategy::select(&settings, &endpoints()).unwrap();
        assert_eq!(strategy.url(), "https://api.deepseek.com/chat/completions");
        assert_eq!(strategy.model(), "deepseek-chat");
    }

    #[test]
    fn test_select_custom_model() {
        let settings = Settings::default()
            .with_key(Provider::OpenAi, "sk")
            .with_model(Provider::OpenAi, "gpt-4.1-nano");
        let strategy = WireStrategy::select(&settings, &endpoints()).unwrap();
        assert_eq!(strategy.model(), "gpt-4.1-nano");
    }

    #[test]
    fn test_select_ollama_without_key() {
        let settings = Settings::default().with_provider(Provider::Ollama);
        let strategy = WireStrategy::select(&settings, &endpoints()).unwrap();
        assert_eq!(strategy.url(), "http://localhost:11434/api/chat");
        assert_eq!(strategy.model(), "llama3");
    }

    #[test]
    fn test_select_ollama_base_url_from_key() {
        let settings = Settings::default()
            .with_provider(Provider::Ollama)
            .with_key(Provider::Ollama, "http://gpu-box:11434/");
        let strategy = WireStrategy::select(&settings, &endpoints()).unwrap();
        assert_eq!(strategy.url(), "http://gpu-box:11434/api/chat");
    }

    #[test]
    fn test_gemini_url() {
        let settings = Settings::default()
            .with_provider(Provider::Gemini)
            .with_key(Provider::Gemini, "g-key");
        let strategy = WireStrategy::select(&settings, &endpoints()).unwrap();
        assert_eq!(
            strategy.url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_extract_openai_text() {
        let strategy = WireStrategy::OpenAiCompatible {
            endpoint: String::new(),
            api_key: String::new(),
            model: String::new(),
        };
        let body = r#"{"choices": [{"message": {"content": "  Development/GitHub \n"}}]}"#;
        assert_eq!(strategy.extract_text(body).unwrap(), "Development/GitHub");
    }

    #[test]
    fn test_extract_openai_no_choices() {
        let strategy = WireStrategy::OpenAiCompatible {
            endpoint: String::new(),
            api_key: String::new(),
            model: String::new(),
        };
        let result = strategy.extract_text(r#"{"choices": []}"#);
        assert!(matches!(result, Err(ProviderError::InvalidResponse(_))));
    }

    #[test]
    fn test_extract_gemini_text() {
        let strategy = WireStrategy::Gemini {
            base_url: String::new(),
            api_key: String::new(),
            model: String::new(),
        };
        let body = r#"{"candidates": [{"content": {"parts": [{"text": "Finance/Crypto"}]}}]}"#;
        assert_eq!(strategy.extract_text(body).unwrap(), "Finance/Crypto");
    }

    #[test]
    fn test_extract_gemini_blocked_candidate() {
        let strategy = WireStrategy::Gemini {
            base_url: String::new(),
            api_key: String::new(),
            model: String::new(),
        };
        let body = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        assert!(strategy.extract_text(body).is_err());
    }

    #[test]
    fn test_extract_local_chat_text() {
        let strategy = WireStrategy::LocalChat {
            base_url: String::new(),
            model: String::new(),
        };
        let body = r#"{"model": "llama3", "message": {"role": "assistant", "content": "Work"}, "done": true}"#;
        assert_eq!(strategy.extract_text(body).unwrap(), "Work");
    }

    #[test]
    fn test_extract_empty_answer() {
        let strategy = WireStrategy::LocalChat {
            base_url: String::new(),
            model: String::new(),
        };
        let body = r#"{"message": {"content": "   "}}"#;
        assert!(matches!(strategy.extract_text(body), Err(ProviderError::EmptyResponse)));
    }

    #[test]
    fn test_extract_malformed_json() {
        let strategy = WireStrategy::LocalChat {
            base_url: String::new(),
            model: String::new(),
        };
        assert!(matches!(
            strategy.extract_text("<html>oops</html>"),
            Err(ProviderError::InvalidResponse(_))
        ));
    }
