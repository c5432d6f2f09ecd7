/// Ping パケットの id を生成する（16ビット範囲で循環）
#[derive(Debug)]
pub struct PingIdGenerator {
    current_id: u16,
}

impl PingIdGenerator {
    /// 新しい id ジェネレーターを作成
    pub fn new() -> Self {
        Self { current_id: 1 }
    }

    /// 次の id を返す。0 は使わない
    pub fn next_id(&mut self) -> u16 {
        let id = self.current_id;
        self.current_id = self.current_id.wrapping_add(1);
        if self.current_id == 0 {
            self.current_id = 1;
        }
        id
    }
}

impl Default for PingIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
