// ABOUTME: Rule-table composer for weekly training principles and practical notes
// ABOUTME: Pure function of goal, level, frequency, and equipment; text is fixed per branch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitai_core::models::{Equipment, Goal, Level};

/// Frequency at and above which the recovery principle is added
pub const HIGH_FREQUENCY_DAYS: u32 = 5;

const FAT_LOSS_PRINCIPLES: [&str; 3] = [
    "Tập trung vào số lần lặp cao (12-15) để tối đa hóa đốt calo",
    "Giữ thời gian nghỉ ngắn (45-60 giây) để duy trì nhịp tim cao",
    "Cân nhắc thêm 10-15 phút cardio sau khi tập tạ",
];

const MUSCLE_GAIN_PRINCIPLES: [&str; 3] = [
    "Tăng tải dần: cố gắng tăng tạ hoặc số lần lặp mỗi tuần",
    "Tập trung vào động tác có kiểm soát với form chuẩn",
    "Nghỉ 90-120 giây giữa các hiệp để phục hồi tối ưu",
];

const MAINTENANCE_PRINCIPLES: [&str; 3] = [
    "Duy trì khối lượng tập luyện ổn định từ tuần này sang tuần khác",
    "Tập trung vào các bài tập compound để hiệu quả hơn",
    "Cân bằng cường độ với thời gian phục hồi",
];

const BEGINNER_PRINCIPLE: &str = "Tập trung học form đúng trước khi tăng tạ";
const ADVANCED_PRINCIPLE: &str =
    "Cân nhắc áp dụng kỹ thuật nâng cao như drop sets hoặc supersets";
const HIGH_FREQUENCY_PRINCIPLE: &str =
    "Với tần suất tập cao, ưu tiên giấc ngủ và dinh dưỡng để phục hồi";

const BASE_NOTES: [&str; 3] = [
    "Khởi động 5-10 phút trước mỗi buổi tập",
    "Uống đủ nước trong suốt buổi tập",
    "Lắng nghe cơ thể và nghỉ ngơi nếu cảm thấy quá mệt",
];

const fn goal_principles(goal: Goal) -> &'static [&'static str] {
    match goal {
        Goal::FatLoss => &FAT_LOSS_PRINCIPLES,
        Goal::MuscleGain => &MUSCLE_GAIN_PRINCIPLES,
        Goal::Maintenance => &MAINTENANCE_PRINCIPLES,
    }
}

const fn level_principle(level: Level) -> Option<&'static str> {
    match level {
        Level::Beginner => Some(BEGINNER_PRINCIPLE),
        Level::Advanced => Some(ADVANCED_PRINCIPLE),
        Level::Intermediate => None,
    }
}

const fn equipment_note(equipment: Equipment) -> &'static str {
    match equipment {
        Equipment::None => "Tập trung vào thời gian căng cơ để tối đa hóa hiệu quả bài tập tự trọng",
        Equipment::Home => "Sử dụng tăng tải dần với tạ và dây kháng lực có sẵn",
        Equipment::Gym => "Tận dụng đa dạng thiết bị phòng gym để cô lập các nhóm cơ",
    }
}

const fn goal_note(goal: Goal) -> Option<&'static str> {
    match goal {
        Goal::FatLoss => Some("Duy trì thâm hụt calo nhẹ để đạt kết quả giảm mỡ tối ưu"),
        Goal::MuscleGain => Some("Đảm bảo nạp đủ protein (1.6-2.2g mỗi kg trọng lượng cơ thể)"),
        Goal::Maintenance => None,
    }
}

/// Training principles: goal block, then level line, then the high-frequency line
///
/// `days_per_week` is the profile's requested value, not the scheduled day count.
#[must_use]
pub fn principles(goal: Goal, level: Level, days_per_week: u32) -> Vec<String> {
    let mut principles: Vec<String> = goal_principles(goal)
        .iter()
        .map(|line| (*line).to_owned())
        .collect();

    if let Some(line) = level_principle(level) {
        principles.push(line.to_owned());
    }
    if days_per_week >= HIGH_FREQUENCY_DAYS {
        principles.push(HIGH_FREQUENCY_PRINCIPLE.to_owned());
    }

    principles
}

/// Practical notes: base block, then the equipment line, then the goal line
#[must_use]
pub fn notes(goal: Goal, equipment: Equipment) -> Vec<String> {
    let mut notes: Vec<String> = BASE_NOTES.iter().map(|line| (*line).to_owned()).collect();
    notes.push(equipment_note(equipment).to_owned());
    if let Some(line) = goal_note(goal) {
        notes.push(line.to_owned());
    }
    notes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beginner_fat_loss_principles() {
        let lines = principles(Goal::FatLoss, Level::Beginner, 3);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], FAT_LOSS_PRINCIPLES[0]);
        assert_eq!(lines[3], BEGINNER_PRINCIPLE);
    }

    #[test]
    fn test_intermediate_high_frequency_principles() {
        let lines = principles(Goal::Maintenance, Level::Intermediate, 5);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], HIGH_FREQUENCY_PRINCIPLE);

        // raw value counts even when the split falls back to three days
        let lines = principles(Goal::MuscleGain, Level::Advanced, 7);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[3], ADVANCED_PRINCIPLE);
    }

    #[test]
    fn test_notes_per_equipment_and_goal() {
        let lines = notes(Goal::Maintenance, Equipment::Gym);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], equipment_note(Equipment::Gym));

        let lines = notes(Goal::MuscleGain, Equipment::None);
        assert_eq!(lines.len(), 5);
        assert!(lines[4].contains("protein"));
    }
}
