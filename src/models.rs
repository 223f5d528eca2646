//! 数据模型
//!
//! TodoItem 与 TodoList 的定义及按 id 的列表操作

/// 单个待办事项
#[derive(Debug, Clone, PartialEq)]
pub struct TodoItem {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// 待办列表（保持插入顺序）
#[derive(Debug, Clone)]
pub struct TodoList {
    pub items: Vec<TodoItem>,
    next_id: u64, // 单调递增计数器，id 终生唯一
}

impl TodoList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// 添加新事项：去除首尾空白，结果为空则不添加
    ///
    /// 成功时返回新事项的 id
    pub fn add(&mut self, raw_text: &str) -> Option<u64> {
        let text = raw_text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;

        self.items.push(TodoItem {
            id,
            text: text.to_string(),
            completed: false,
        });
        Some(id)
    }

    /// 查找指定事项
    pub fn get(&self, id: u64) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn get_mut(&mut self, id: u64) -> Option<&mut TodoItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// 翻转完成状态；id 不存在则不做任何事
    pub fn toggle_completed(&mut self, id: u64) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    /// 覆盖事项文本（原样写入，不做裁剪或校验）
    pub fn set_text(&mut self, id: u64, text: String) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.text = text;
                true
            }
            None => false,
        }
    }

    /// 删除指定事项，其余事项相对顺序不变
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_text() {
        let mut list = TodoList::new();
        let id = list.add("  buy milk  ").unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(list.get(id).unwrap().text, "buy milk");
        assert!(!list.get(id).unwrap().completed);
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut list = TodoList::new();
        assert_eq!(list.add(""), None);
        assert_eq!(list.add("   "), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_ids_unique_and_monotonic() {
        let mut list = TodoList::new();
        let a = list.add("a").unwrap();
        let b = list.add("b").unwrap();
        list.remove(a);
        let c = list.add("c").unwrap();

        assert!(b > a);
        assert!(c > b); // 删除后 id 不复用
        let mut ids: Vec<u64> = list.items.iter().map(|item| item.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), list.len());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut list = TodoList::new();
        let id = list.add("task").unwrap();

        assert!(list.toggle_completed(id));
        assert!(list.get(id).unwrap().completed);
        assert!(list.toggle_completed(id));
        assert!(!list.get(id).unwrap().completed);
    }

    #[test]
    fn test_set_text_verbatim() {
        let mut list = TodoList::new();
        let id = list.add("old").unwrap();

        // 保存时不做任何校验，空白和空串都原样写入
        assert!(list.set_text(id, "  new text  ".to_string()));
        assert_eq!(list.get(id).unwrap().text, "  new text  ");
        assert!(list.set_text(id, String::new()));
        assert_eq!(list.get(id).unwrap().text, "");
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut list = TodoList::new();
        let a = list.add("a").unwrap();
        let b = list.add("b").unwrap();
        let c = list.add("c").unwrap();

        assert!(list.remove(b));
        let remaining: Vec<u64> = list.items.iter().map(|item| item.id).collect();
        assert_eq!(remaining, vec![a, c]);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut list = TodoList::new();
        let id = list.add("task").unwrap();
        let snapshot = list.clone();

        assert!(!list.toggle_completed(id + 99));
        assert!(!list.set_text(id + 99, "x".to_string()));
        assert!(!list.remove(id + 99));
        assert_eq!(list.items, snapshot.items);
    }
}
