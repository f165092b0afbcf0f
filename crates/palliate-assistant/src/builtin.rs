//! Built-in caregiver FAQ and topic rules.
//!
//! FAQ entries come first, then topic rules; the order below is the
//! priority order. Overlapping triggers resolve to the earlier entry, so
//! `เสมหะ` always answers with the secretions rule, never the hydration
//! rule that also lists it.

use crate::error::RuleError;
use crate::rules::{FaqEntry, RuleTable};

/// (question, answer)
const FAQ: &[(&str, &str)] = &[
    (
        "ควรให้ยาแก้ปวดเมื่อไร?",
        "ให้ตามเวลาที่กำหนดสม่ำเสมอ ไม่ต้องรอให้ปวดมาก และสามารถให้ยาเสริม (rescue) ได้ตามแผนของแพทย์เมื่อปวดพุ่งขึ้น",
    ),
    (
        "ช่วงใกล้เสียชีวิตมีสัญญาณอะไร",
        "หลับมากขึ้น กินได้น้อย ชีพจรเบา หายใจไม่สม่ำเสมอ มือเท้าเย็น ปัสสาวะน้อยลง และอาจมีเสียงหายใจครืดคราด",
    ),
    (
        "มีเสมหะมากทำอย่างไร",
        "จัดท่าตะแคง ดูแลปากให้ชุ่ม เปิดพัดลมเบาๆ และปรึกษาทีมดูแลเรื่องยาลดเสมหะ ถ้าหอบมากให้ติดต่อพยาบาลทันที",
    ),
    (
        "ทำอย่างไรกับความเศร้าและความเครียด",
        "พูดคุยเปิดใจ ขอการสนับสนุนจากทีมสหวิชาชีพ นักจิตวิทยา/นักสังคมสงเคราะห์ เข้าร่วมกลุ่มผู้ดูแล และพักผ่อนให้เพียงพอ",
    ),
    (
        "ติดต่อพยาบาลอย่างไร",
        "ใช้ปุ่ม 'ติดต่อทีมโรงพยาบาล' เพื่อโทร นัดหมายวิดีโอ หรือฝากข้อความพร้อมไฟล์/รูปภาพ (ปลอดภัย)",
    ),
];

/// (regex, answer)
const TOPICS: &[(&str, &str)] = &[
    (
        "ปวด|pain",
        "ให้ยาตามเวลาและบันทึกระดับปวด หากปวดมากกว่า 7 ติดต่อทีมโรงพยาบาล",
    ),
    (
        "หอบ|ลมหายใจ|dysp",
        "จัดท่ากึ่งนั่ง เปิดพัดลมเบาๆ ให้ยาตามแผน หากริมฝีปากเขียว โทรหาพยาบาลทันที",
    ),
    (
        "DNR|ไม่ฟื้น",
        "เอกสาร DNR ควรลงนามโดยผู้ป่วย/ผู้แทนตามกฎหมายและแพทย์ แจ้งทุกคนที่เกี่ยวข้องและแนบในแฟ้มผู้ป่วย",
    ),
    (
        "หายใจลำบาก|เสียงครืดคราด|เสมหะ",
        "จัดท่านอนตะแคง/ศีรษะสูง เช็ดปากและริมฝีปากให้ชุ่มชื้น หลีกเลี่ยงการดูดเสมหะถ้าไม่จำเป็น ใช้ยาเมื่อเสียงรบกวนมากหรือผู้ป่วยอึดอัด",
    ),
    (
        "ดื่มน้ำ|เสมหะ",
        "ไม่ควรบังคับดื่มน้ำมาก เพราะอาจสำลักได้ ควรใช้ผ้าชุบน้ำเช็ดริมฝีปากหรือให้จิบน้ำเล็กน้อยแทน",
    ),
    (
        "ภาวะเครียด|ผู้ดูแล|เครียด",
        "ขอความช่วยเหลือจากครอบครัว/ทีมสหวิชาชีพ หาเวลาพักผ่อน และพูดคุยกับคนที่ไว้ใจ",
    ),
    (
        "สับสน|การสื่อสาร|Delirium",
        "จัดสิ่งแวดล้อมให้สงบ สว่างพอดี มีนาฬิกา/ปฏิทินให้ผู้ป่วยรับรู้เวลา พูดด้วยน้ำเสียงนุ่มนวล แนะนำตัวทุกครั้งถ้าผู้ป่วยสับสน อยู่ใกล้ ๆ สัมผัสมือหรือไหล่เพื่อให้ผู้ป่วยมั่นใจว่าไม่ได้อยู่ลำพัง หลีกเลี่ยงการเถียงหรือบังคับ แจ้งทีมดูแลหากอาการรุนแรงหรือผู้ป่วยก้าวร้าว/นอนไม่หลับนาน",
    ),
    (
        "ร้องไห้|เศร้า",
        "การแสดงออกเป็นเรื่องธรรมชาติ แต่อาจเลือกเวลาที่เหมาะสม สำคัญคือให้ผู้ป่วยรู้ว่าคุณอยู่ตรงนี้เพื่อเขา",
    ),
    (
        "อาการระยะท้าย|วาระสุดท้าย|สิ้นใจ|จะจากไป",
        "อาจสังเกตได้จากอ่อนแรงมากขึ้น กินได้น้อย หายใจเปลี่ยน ทีมดูแลจะคอยบอกและช่วยเตรียมใจ",
    ),
    (
        "ประคับประคอง|รักษาโรค",
        "การรักษาโรคอาจไม่ได้ผลอีกต่อไป แต่การดูแลประคับประคองคือการดูแลให้คุณสบายที่สุด ทั้งด้านร่างกายและจิตใจ เพื่อคุณภาพชีวิตที่ดีที่สุดในเวลาที่เหลือ",
    ),
];

/// The built-in FAQ entries, in priority order.
pub fn faq_entries() -> Vec<FaqEntry> {
    FAQ.iter().map(|(q, a)| FaqEntry::new(*q, *a)).collect()
}

/// Compile the built-in table.
pub fn rule_table() -> Result<RuleTable, RuleError> {
    let mut builder = RuleTable::builder();
    for entry in faq_entries() {
        builder = builder.faq(entry);
    }
    for (pattern, answer) in TOPICS {
        builder = builder.regex(*pattern, *answer);
    }
    builder.build()
}
