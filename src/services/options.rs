//! # 선택지 검증과 정규화
//!
//! 질문 선택지(options)의 형태는 쓰기 경계에서 **한 번만** 결정합니다:
//! 여기서 검증을 통과한 목록이 정규화된 JSON 배열 문자열로 저장되고,
//! 읽기 경로는 그 JSON을 파싱만 할 뿐 재해석하지 않습니다.
//! ("JSON 시도 후 실패하면 줄바꿈으로 split" 같은 이중 해석 경로는 없습니다.)

use crate::error::AppError;
use crate::models::QuestionType;
use crate::services::values::VALUE_DELIMITER;

/// 질문 유형과 선택지 조합을 검증하고 저장용 JSON 문자열로 정규화합니다.
///
/// 규칙:
/// - 선택형 유형(single-choice, multi-choice, dropdown)은 비어 있지 않은
///   선택지 목록이 필수입니다.
/// - 비선택형 유형에 선택지가 오면 거부합니다 (조용히 버리지 않음).
/// - 각 선택지는 공백을 제거한 뒤 비어 있으면 안 되고, 중복될 수 없으며,
///   복수 값 구분자(`|||`)를 포함할 수 없습니다.
pub fn validate_options(
    question_type: QuestionType,
    options: Option<&Vec<String>>,
) -> Result<Option<String>, AppError> {
    if !question_type.is_choice() {
        // 비선택형: 선택지가 있으면 호출자 실수이므로 알려줍니다.
        if options.is_some_and(|o| !o.is_empty()) {
            return Err(AppError::BadRequest(
                "options are only allowed for choice-type questions".to_string(),
            ));
        }
        return Ok(None);
    }

    let options = options.ok_or_else(|| {
        AppError::BadRequest("choice-type questions require options".to_string())
    })?;

    let trimmed: Vec<String> = options.iter().map(|o| o.trim().to_string()).collect();

    if trimmed.is_empty() || trimmed.iter().any(|o| o.is_empty()) {
        return Err(AppError::BadRequest(
            "options must be a non-empty list of non-empty strings".to_string(),
        ));
    }

    if trimmed.iter().any(|o| o.contains(VALUE_DELIMITER)) {
        return Err(AppError::BadRequest(format!(
            "option text must not contain the reserved sequence {VALUE_DELIMITER:?}"
        )));
    }

    // O(n²)이지만 선택지는 몇 개 수준입니다.
    for (i, option) in trimmed.iter().enumerate() {
        if trimmed[..i].contains(option) {
            return Err(AppError::BadRequest(format!(
                "duplicate option: {option:?}"
            )));
        }
    }

    let json = serde_json::to_string(&trimmed)
        .map_err(|e| AppError::Internal(format!("Failed to serialize options: {e}")))?;

    Ok(Some(json))
}

/// 저장된 선택지 JSON을 목록으로 되돌립니다.
///
/// 쓰기 경계에서 정규화되므로 파싱 실패는 데이터 손상을 뜻합니다 —
/// 폴백 없이 내부 오류로 전파합니다.
pub fn decode_options(options: Option<&str>) -> Result<Vec<String>, AppError> {
    match options {
        None => Ok(Vec::new()),
        Some(json) => serde_json::from_str(json)
            .map_err(|e| AppError::Internal(format!("Corrupt options column: {e}"))),
    }
}
