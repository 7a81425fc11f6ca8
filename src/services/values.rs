//! # 복수 선택 답변 인코딩
//!
//! 복수 선택(multi-choice) 답변은 선택된 값들을 구분자로 이어 붙인
//! 하나의 텍스트 컬럼으로 저장됩니다. 선택지 텍스트에는 쉼표가
//! 들어갈 수 있으므로("Bleu, clair") 쉼표는 구분자가 될 수 없습니다.
//!
//! 구분자 `|||`는 선택지 텍스트에서 금지됩니다 —
//! services::options::validate_options가 쓰기 시점에 거부하므로,
//! 구분자로 split하는 디코딩은 항상 무손실입니다.

/// 저장용 복수 값 구분자. 선택지 텍스트에 등장할 수 없는 3글자 센티널.
pub const VALUE_DELIMITER: &str = "|||";

/// 사람이 읽는 표시용 구분자 (내보내기 셀)
pub const DISPLAY_SEPARATOR: &str = ", ";

/// 선택된 값들을 저장용 텍스트 하나로 인코딩합니다.
pub fn encode_values(values: &[String]) -> String {
    values.join(VALUE_DELIMITER)
}

/// 저장된 텍스트를 선택된 값들로 되돌립니다.
///
/// 빈 문자열은 빈 집합입니다 (빈 값 하나가 아니라).
pub fn decode_values(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(VALUE_DELIMITER).map(str::to_string).collect()
}

/// 저장된 텍스트를 스프레드시트용 표시 문자열로 바꿉니다.
/// 단일 값 답변은 구분자가 없으므로 그대로 지나갑니다.
pub fn display_text(text: &str) -> String {
    text.replace(VALUE_DELIMITER, DISPLAY_SEPARATOR)
}
