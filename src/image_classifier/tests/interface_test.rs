#[cfg(test)]
mod interface_test {
    use crate::image_classifier::interface::{
        format_percent, parse_prediction, PredictError, Prediction,
    };

    #[test]
    fn test_parse_numeric_strings() {
        let prediction = parse_prediction(r#"{"cat": "0.73", "dog": "0.27"}"#).unwrap();

        assert_eq!(format_percent(prediction.cat), "73");
        assert_eq!(format_percent(prediction.dog), "27");
    }

    #[test]
    fn test_parse_numbers() {
        let prediction = parse_prediction(r#"{"cat": 0.5, "dog": 1}"#).unwrap();

        assert_eq!(
            prediction,
            Prediction {
                cat: 50.0,
                dog: 100.0
            }
        );
    }

    #[test]
    fn test_scores_are_independent() {
        let prediction = parse_prediction(r#"{"cat": 0.9, "dog": 0.4}"#).unwrap();

        assert!(prediction.cat + prediction.dog > 100.0);
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let prediction =
            parse_prediction(r#"{"cat": "0.1", "dog": "0.9", "model": "resnet"}"#).unwrap();

        assert_eq!(format_percent(prediction.dog), "90");
    }

    #[test]
    fn test_non_json_body() {
        let result = parse_prediction("<html>Internal Server Error</html>");

        assert!(matches!(result, Err(PredictError::InvalidResponse(_))));
    }

    #[test]
    fn test_missing_field() {
        let result = parse_prediction(r#"{"cat": 0.2}"#);

        assert!(matches!(result, Err(PredictError::InvalidResponse(_))));
    }

    #[test]
    fn test_unparseable_score() {
        let result = parse_prediction(r#"{"cat": "many", "dog": "0.2"}"#);

        match result {
            Err(PredictError::InvalidResponse(message)) => assert!(message.contains("cat")),
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(73.0), "73");
        assert_eq!(format_percent(27.000000000000004), "27");
        assert_eq!(format_percent(12.346), "12.35");
        assert_eq!(format_percent(0.0), "0");
    }
}
