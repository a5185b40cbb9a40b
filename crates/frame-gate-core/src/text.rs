//! User-facing text.
//!
//! Every string that ends up in feedback or summaries comes from here, so a
//! pipeline built for one language never mixes in another.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{GateKey, LensType, RunStatus};
use crate::gates::{LensShift, Pan, RatioBucket, ShiftTier, Tilt};

/// Output language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    /// English.
    #[default]
    #[serde(rename = "en")]
    English,
    /// Korean.
    #[serde(rename = "ko")]
    Korean,
}

impl Language {
    /// Two-letter code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Korean => "ko",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "ko" | "korean" => Ok(Self::Korean),
            other => Err(format!("unsupported language '{other}' (expected 'en' or 'ko')")),
        }
    }
}

/// Message catalog for one language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Messages {
    language: Language,
}

impl Messages {
    /// Creates a catalog for the given language.
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self { language }
    }

    /// The catalog's language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    const fn ko(&self) -> bool {
        matches!(self.language, Language::Korean)
    }

    /// Display name of a gate.
    #[must_use]
    pub const fn gate_name(&self, gate: GateKey) -> &'static str {
        match (gate, self.ko()) {
            (GateKey::AspectRatio, false) => "Aspect ratio",
            (GateKey::Framing, false) => "Framing",
            (GateKey::Composition, false) => "Composition",
            (GateKey::Compression, false) => "Compression",
            (GateKey::Pose, false) => "Pose",
            (GateKey::AspectRatio, true) => "종횡비",
            (GateKey::Framing, true) => "프레이밍",
            (GateKey::Composition, true) => "구도",
            (GateKey::Compression, true) => "압축감",
            (GateKey::Pose, true) => "포즈",
        }
    }

    // === Aspect ratio ===

    /// Label for an aspect ratio bucket.
    #[must_use]
    pub fn ratio_label(&self, bucket: RatioBucket) -> String {
        let ko = self.ko();
        let fixed = |en: &str, kr: &str| {
            if ko {
                kr.to_string()
            } else {
                en.to_string()
            }
        };
        match bucket {
            RatioBucket::Square => fixed("1:1 (square)", "1:1 (정사각형)"),
            RatioBucket::FourThree => fixed("4:3 (landscape)", "4:3 (가로)"),
            RatioBucket::ThreeTwo => fixed("3:2 (landscape DSLR)", "3:2 (가로 DSLR)"),
            RatioBucket::SixteenNine => fixed("16:9 (landscape wide)", "16:9 (가로 와이드)"),
            RatioBucket::ThreeFour => fixed("3:4 (portrait)", "3:4 (세로)"),
            RatioBucket::TwoThree => fixed("2:3 (portrait DSLR)", "2:3 (세로 DSLR)"),
            RatioBucket::NineSixteen => fixed("9:16 (portrait wide)", "9:16 (세로 와이드)"),
            RatioBucket::Landscape(r) => {
                if ko {
                    format!("{r:.2}:1 (가로)")
                } else {
                    format!("{r:.2}:1 (landscape)")
                }
            }
            RatioBucket::Portrait(r) => {
                let inverse = 1.0 / r;
                if ko {
                    format!("1:{inverse:.2} (세로)")
                } else {
                    format!("1:{inverse:.2} (portrait)")
                }
            }
        }
    }

    /// Action shown when the ratios match.
    #[must_use]
    pub fn aspect_matches(&self) -> String {
        if self.ko() {
            "비율이 일치합니다".into()
        } else {
            "Aspect ratio matches".into()
        }
    }

    /// Action telling the user which ratio to switch to.
    #[must_use]
    pub fn aspect_switch_to(&self, target_name: &str) -> String {
        if self.ko() {
            format!("카메라 비율을 {target_name}로 변경하세요")
        } else {
            format!("Switch the camera ratio to {target_name}")
        }
    }

    // === Framing ===

    /// Action asking for a different shot type.
    #[must_use]
    pub fn shot_type_change(&self, current: &str, reference: &str) -> String {
        if self.ko() {
            format!("샷 타입 변경: {current} → {reference}")
        } else {
            format!("Change shot type: {current} → {reference}")
        }
    }

    /// Framing summary for the number of issues found.
    #[must_use]
    pub const fn framing_summary(&self, issue_count: usize) -> &'static str {
        match (issue_count, self.ko()) {
            (0, false) => "Framing matches the reference",
            (1, false) => "Minor framing adjustment needed",
            (_, false) => "Framing adjustment needed",
            (0, true) => "프레이밍이 레퍼런스와 일치합니다",
            (1, true) => "프레이밍 미세 조정 필요",
            (_, true) => "프레이밍 조정이 필요합니다",
        }
    }

    // === Composition ===

    /// Camera movement instruction, or `None` when neither axis needs to move.
    #[must_use]
    pub fn move_direction(&self, pan: Option<Pan>, tilt: Option<Tilt>) -> Option<String> {
        let ko = self.ko();
        let mut moves: Vec<&str> = Vec::with_capacity(2);
        if let Some(pan) = pan {
            moves.push(match (pan, ko) {
                (Pan::Right, false) => "move camera right",
                (Pan::Left, false) => "move camera left",
                (Pan::Right, true) => "카메라를 오른쪽으로",
                (Pan::Left, true) => "카메라를 왼쪽으로",
            });
        }
        if let Some(tilt) = tilt {
            moves.push(match (tilt, ko) {
                (Tilt::Down, false) => "tilt camera down",
                (Tilt::Up, false) => "tilt camera up",
                (Tilt::Down, true) => "카메라를 아래로 틸트",
                (Tilt::Up, true) => "카메라를 위로 틸트",
            });
        }
        if moves.is_empty() {
            return None;
        }
        if ko {
            Some(format!("{} 이동하세요", moves.join(" 그리고 ")))
        } else {
            Some(moves.join(" and "))
        }
    }

    // === Compression ===

    /// Display name of a lens bucket.
    #[must_use]
    pub const fn lens_name(&self, lens: LensType) -> &'static str {
        match (lens, self.ko()) {
            (LensType::Wide, false) => "wide-angle lens",
            (LensType::SemiWide, false) => "semi-wide lens",
            (LensType::Normal, false) => "standard lens",
            (LensType::MediumTele, false) => "medium telephoto lens",
            (LensType::Telephoto, false) => "telephoto lens",
            (LensType::Wide, true) => "광각렌즈",
            (LensType::SemiWide, true) => "준광각",
            (LensType::Normal, true) => "표준렌즈",
            (LensType::MediumTele, true) => "중망원",
            (LensType::Telephoto, true) => "망원렌즈",
        }
    }

    /// Two-line adjustment: what differs, then how to fix it.
    #[must_use]
    pub fn compression_adjustment(
        &self,
        shift: LensShift,
        tier: ShiftTier,
        current_lens: &str,
        target_lens: &str,
    ) -> [String; 2] {
        if self.ko() {
            return match (shift, tier) {
                (LensShift::Wider, ShiftTier::Slight) => [
                    "현재 사진이 약간 더 광각입니다".into(),
                    "한두 걸음 뒤로 물러난 뒤, 줌을 한 단계 키워서 촬영하세요".into(),
                ],
                (LensShift::Wider, ShiftTier::Moderate) => [
                    format!("현재 {current_lens}로 촬영되어 레퍼런스({target_lens})보다 광각입니다"),
                    "몇 걸음 뒤로 물러나서 줌을 2-3단계 키우세요".into(),
                ],
                (LensShift::Wider, ShiftTier::Large) => [
                    format!("상당한 압축감 차이가 있습니다 ({current_lens} → {target_lens})"),
                    "여러 걸음 뒤로 물러나서 최대한 줌인하세요".into(),
                ],
                (LensShift::Tighter, ShiftTier::Slight) => [
                    "현재 사진이 약간 더 압축되어 있습니다".into(),
                    "한두 걸음 앞으로 다가간 뒤, 줌을 한 단계 줄여서 촬영하세요".into(),
                ],
                (LensShift::Tighter, ShiftTier::Moderate) => [
                    format!(
                        "현재 {current_lens}로 촬영되어 레퍼런스({target_lens})보다 압축감이 강합니다"
                    ),
                    "몇 걸음 앞으로 다가가서 줌을 2-3단계 줄이세요".into(),
                ],
                (LensShift::Tighter, ShiftTier::Large) => [
                    format!("상당한 압축감 차이가 있습니다 ({current_lens} → {target_lens})"),
                    "여러 걸음 앞으로 다가가서 줌아웃하세요".into(),
                ],
            };
        }
        match (shift, tier) {
            (LensShift::Wider, ShiftTier::Slight) => [
                "The current shot is slightly wider than the reference".into(),
                "Step back a pace or two, then zoom in one step".into(),
            ],
            (LensShift::Wider, ShiftTier::Moderate) => [
                format!(
                    "The current shot looks like a {current_lens}, wider than the reference ({target_lens})"
                ),
                "Step back a few paces and zoom in 2-3 steps".into(),
            ],
            (LensShift::Wider, ShiftTier::Large) => [
                format!("Large compression difference ({current_lens} → {target_lens})"),
                "Step back several paces and zoom in as far as you can".into(),
            ],
            (LensShift::Tighter, ShiftTier::Slight) => [
                "The current shot is slightly more compressed than the reference".into(),
                "Step forward a pace or two, then zoom out one step".into(),
            ],
            (LensShift::Tighter, ShiftTier::Moderate) => [
                format!(
                    "The current shot looks like a {current_lens}, more compressed than the reference ({target_lens})"
                ),
                "Step forward a few paces and zoom out 2-3 steps".into(),
            ],
            (LensShift::Tighter, ShiftTier::Large) => [
                format!("Large compression difference ({current_lens} → {target_lens})"),
                "Step forward several paces and zoom out".into(),
            ],
        }
    }

    // === Pose ===

    /// Suggestion about tilted shoulders.
    #[must_use]
    pub fn shoulder_tilt(&self, degrees: f64) -> String {
        if self.ko() {
            format!("어깨가 {degrees:.0}도 기울어져 있습니다")
        } else {
            format!("Shoulders are tilted by {degrees:.0} degrees")
        }
    }

    // === Critical feedback ===

    /// Issue text when the composition gate blocks.
    #[must_use]
    pub fn composition_issue(&self) -> String {
        if self.ko() {
            "인물 위치가 레퍼런스와 다릅니다".into()
        } else {
            "Subject position differs from the reference".into()
        }
    }

    /// Issue text when the compression gate blocks with lens details.
    #[must_use]
    pub fn compression_issue(&self, current_lens: &str, target_lens: &str) -> String {
        if self.ko() {
            format!("압축감이 다릅니다 ({current_lens} → {target_lens})")
        } else {
            format!("Compression differs ({current_lens} → {target_lens})")
        }
    }

    /// Issue text for a gate that failed without a feedback payload.
    #[must_use]
    pub fn generic_issue(&self, gate: GateKey) -> String {
        let text = match (gate, self.ko()) {
            (GateKey::AspectRatio, false) => "Match the aspect ratio",
            (GateKey::Framing, false) => "Framing needs adjustment",
            (GateKey::Composition, false) => "Subject position differs from the reference",
            (GateKey::Compression, false) => "Compression needs adjustment",
            (GateKey::Pose, false) => "Pose differs from the reference",
            (GateKey::AspectRatio, true) => "종횡비를 맞춰주세요",
            (GateKey::Framing, true) => "프레이밍 조정이 필요합니다",
            (GateKey::Composition, true) => "인물 위치가 레퍼런스와 다릅니다",
            (GateKey::Compression, true) => "압축감 조정 필요",
            (GateKey::Pose, true) => "포즈가 레퍼런스와 다릅니다",
        };
        text.to_string()
    }

    /// Action for a gate that failed without a specific instruction.
    #[must_use]
    pub fn generic_action(&self, gate: GateKey) -> String {
        let text = match (gate, self.ko()) {
            (GateKey::AspectRatio, false) => "Change the camera ratio setting",
            (GateKey::Framing, false) => "Match the shot type and subject size",
            (GateKey::Composition, false) => "Move the camera to match the composition",
            (GateKey::Compression, false) => "Adjust the zoom level",
            (GateKey::Pose, false) => "Adjust the pose",
            (GateKey::AspectRatio, true) => "카메라 비율 설정을 변경하세요",
            (GateKey::Framing, true) => "샷 타입이나 인물 크기를 맞춰보세요",
            (GateKey::Composition, true) => "카메라를 이동하여 구도를 맞춰주세요",
            (GateKey::Compression, true) => "줌 레벨을 조정해주세요",
            (GateKey::Pose, true) => "포즈를 조정해주세요",
        };
        text.to_string()
    }

    // === Result ===

    /// One-line message for a run status.
    #[must_use]
    pub const fn status_message(&self, status: RunStatus) -> &'static str {
        match (status, self.ko()) {
            (RunStatus::BlockedAtAspectRatio, false) => {
                "The aspect ratio does not match. Adjust the camera ratio first."
            }
            (RunStatus::BlockedAtFraming, false) => {
                "The framing does not match. Adjust the shot type, subject size and margins."
            }
            (RunStatus::BlockedAtComposition, false) => {
                "The composition does not match. Adjust the camera position."
            }
            (RunStatus::BlockedAtCompression, false) => {
                "The compression does not match. Adjust distance and zoom."
            }
            (RunStatus::AllGatesPassed, false) => "Everything matches the reference!",
            (RunStatus::BlockedAtAspectRatio, true) => {
                "종횡비가 맞지 않습니다. 먼저 카메라 비율을 조정해주세요."
            }
            (RunStatus::BlockedAtFraming, true) => {
                "프레이밍이 맞지 않습니다. 샷 타입, 인물 크기, 여백을 조정해주세요."
            }
            (RunStatus::BlockedAtComposition, true) => {
                "구도가 맞지 않습니다. 카메라 위치를 조정해주세요."
            }
            (RunStatus::BlockedAtCompression, true) => {
                "압축감이 맞지 않습니다. 거리와 줌을 조정해주세요."
            }
            (RunStatus::AllGatesPassed, true) => "모든 항목이 레퍼런스와 일치합니다!",
        }
    }

    /// Friendly summary once every gate passed, by overall score.
    #[must_use]
    pub const fn all_passed_summary(&self, overall_score: f64) -> &'static str {
        let ko = self.ko();
        if overall_score >= 95.0 {
            if ko {
                "완벽합니다! 레퍼런스와 거의 동일해요."
            } else {
                "Perfect! Nearly identical to the reference."
            }
        } else if overall_score >= 85.0 {
            if ko {
                "아주 잘 맞았어요! 미세한 조정만 하면 완벽해요."
            } else {
                "Very close! A small tweak and it's perfect."
            }
        } else if ko {
            "전반적으로 잘 맞았습니다."
        } else {
            "Generally well aligned with the reference."
        }
    }

    /// Friendly summary when a gate blocked, built around its first action.
    #[must_use]
    pub fn blocked_summary(&self, gate: GateKey, first_action: Option<&str>) -> String {
        let ko = self.ko();
        match (gate, first_action) {
            (GateKey::AspectRatio, action) => {
                let action = action.map_or_else(
                    || self.generic_action(GateKey::AspectRatio) + ".",
                    str::to_string,
                );
                if ko {
                    format!("종횡비부터 맞춰주세요. {action}")
                } else {
                    format!("Match the aspect ratio first. {action}")
                }
            }
            (GateKey::Framing, Some(action)) => {
                if ko {
                    format!("프레이밍 조정이 필요해요. {action}")
                } else {
                    format!("The framing needs adjusting. {action}")
                }
            }
            (GateKey::Framing, None) => if ko {
                "프레이밍을 조정해주세요. 샷 타입이나 인물 크기를 맞춰보세요."
            } else {
                "Adjust the framing. Try matching the shot type or subject size."
            }
            .to_string(),
            (GateKey::Composition, Some(action)) => {
                if ko {
                    format!("구도를 조정해주세요. {action}")
                } else {
                    format!("Adjust the composition. {action}")
                }
            }
            (GateKey::Composition, None) => if ko {
                "구도가 맞지 않아요. 카메라 위치를 조정해보세요."
            } else {
                "The composition is off. Try moving the camera."
            }
            .to_string(),
            (GateKey::Compression, Some(action)) => {
                if ko {
                    format!("압축감이 달라요. {action}")
                } else {
                    format!("The compression differs. {action}")
                }
            }
            (GateKey::Compression | GateKey::Pose, _) => if ko {
                "압축감 조정이 필요해요. 거리와 줌을 조절해보세요."
            } else {
                "The compression needs adjusting. Try changing distance and zoom."
            }
            .to_string(),
        }
    }

    /// Friendly summary by number of gates passed, when neither blocked nor complete.
    #[must_use]
    pub fn progress_summary(&self, gates_passed: &[GateKey]) -> String {
        let ko = self.ko();
        let names: Vec<&str> = gates_passed.iter().map(|g| self.gate_name(*g)).collect();
        match names.as_slice() {
            [] => if ko {
                "기본 설정부터 맞춰주세요."
            } else {
                "Start from the basics."
            }
            .to_string(),
            [only] => {
                if ko {
                    format!("좋아요! {only}은(는) 통과했어요. 다음 단계를 진행해주세요.")
                } else {
                    format!("Nice! {only} passed. Move on to the next step.")
                }
            }
            [first, second] => {
                if ko {
                    format!("절반 완료! {first}, {second}은(는) OK. 계속 진행해주세요.")
                } else {
                    format!("Halfway there! {first} and {second} are OK. Keep going.")
                }
            }
            _ => if ko {
                "거의 다 왔어요! 조금만 더 조정하면 완성이에요."
            } else {
                "Almost there! A little more adjustment and you're done."
            }
            .to_string(),
        }
    }

    /// Gate table cell for a completed unscored gate.
    #[must_use]
    pub const fn table_done(&self) -> &'static str {
        if self.ko() {
            "완료"
        } else {
            "done"
        }
    }

    /// Gate table cell for a gate that never ran.
    #[must_use]
    pub const fn table_pending(&self) -> &'static str {
        if self.ko() {
            "대기"
        } else {
            "pending"
        }
    }

    /// Error text when an image cannot be loaded.
    #[must_use]
    pub fn image_load_failed(&self) -> String {
        if self.ko() {
            "이미지 로드 실패".into()
        } else {
            "image load failed".into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parse() {
        assert_eq!("en".parse::<Language>(), Ok(Language::English));
        assert_eq!("KO".parse::<Language>(), Ok(Language::Korean));
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_move_direction_join() {
        let en = Messages::new(Language::English);
        assert_eq!(
            en.move_direction(Some(Pan::Right), None).as_deref(),
            Some("move camera right")
        );
        assert_eq!(
            en.move_direction(Some(Pan::Left), Some(Tilt::Up)).as_deref(),
            Some("move camera left and tilt camera up")
        );
        assert_eq!(en.move_direction(None, None), None);

        let ko = Messages::new(Language::Korean);
        assert_eq!(
            ko.move_direction(Some(Pan::Right), Some(Tilt::Down)).as_deref(),
            Some("카메라를 오른쪽으로 그리고 카메라를 아래로 틸트 이동하세요")
        );
    }

    #[test]
    fn test_ratio_labels_fallback() {
        let en = Messages::new(Language::English);
        assert_eq!(en.ratio_label(RatioBucket::Landscape(2.5)), "2.50:1 (landscape)");
        assert_eq!(en.ratio_label(RatioBucket::Portrait(0.4)), "1:2.50 (portrait)");
        assert_eq!(en.ratio_label(RatioBucket::NineSixteen), "9:16 (portrait wide)");
    }

    #[test]
    fn test_progress_summary_by_count() {
        let en = Messages::new(Language::English);
        assert_eq!(en.progress_summary(&[]), "Start from the basics.");
        assert_eq!(
            en.progress_summary(&[GateKey::AspectRatio]),
            "Nice! Aspect ratio passed. Move on to the next step."
        );
        assert_eq!(
            en.progress_summary(&[GateKey::AspectRatio, GateKey::Framing]),
            "Halfway there! Aspect ratio and Framing are OK. Keep going."
        );
        assert!(en
            .progress_summary(&[GateKey::AspectRatio, GateKey::Framing, GateKey::Composition])
            .starts_with("Almost there!"));
    }

    #[test]
    fn test_all_passed_summary_tiers() {
        let en = Messages::new(Language::English);
        assert!(en.all_passed_summary(96.0).starts_with("Perfect"));
        assert!(en.all_passed_summary(85.0).starts_with("Very close"));
        assert!(en.all_passed_summary(84.9).starts_with("Generally"));
    }

    #[test]
    fn test_blocked_summary_uses_first_action() {
        let en = Messages::new(Language::English);
        assert_eq!(
            en.blocked_summary(GateKey::Composition, Some("move camera right")),
            "Adjust the composition. move camera right"
        );
        assert_eq!(
            en.blocked_summary(GateKey::AspectRatio, None),
            "Match the aspect ratio first. Change the camera ratio setting."
        );
    }
}
