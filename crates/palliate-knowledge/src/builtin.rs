//! Built-in document corpus.

use palliate_core::types::Document;

/// The default knowledge base, in display order.
pub fn documents() -> Vec<Document> {
    vec![
        Document::new(
            1,
            "แนวทางให้ยาแก้ปวดระดับขั้น",
            &["ยาแก้ปวด", "opioid"],
            "หลักการใช้ยาแก้ปวดตามขั้นบันไดของ WHO",
        ),
        Document::new(
            2,
            "การดูแลหายใจลำบากที่บ้าน",
            &["หายใจ", "dyspnea"],
            "ท่าทาง การใช้พัดลม และยา",
        ),
        Document::new(
            3,
            "การดูแลช่องปากผู้ป่วยติดเตียง",
            &["ช่องปาก", "comfort"],
            "การทำความสะอาดและให้ความชุ่มชื้น",
        ),
        Document::new(
            4,
            "เอกสาร DNR และ Advance Care Plan",
            &["DNR", "ACP"],
            "ขั้นตอนเอกสารและการสื่อสาร",
        ),
    ]
}
