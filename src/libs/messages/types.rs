#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskCreateRefused,
    TaskUpdated(String),
    TaskUpdateRefused,
    TaskUnchanged(String),
    TaskDeleted(String),
    TaskNotFound(String),
    TasksHeader,
    NoTasks,
    NoTasksMatching(String),

    // === LABEL MESSAGES ===
    LabelsAdded(usize, String),
    LabelsNotAdded(String),
    LabelDeleted(String),
    LabelNotFound(String, String),
    InvalidLabelSpec(String),
    UnknownLabelColor(String),

    // === MOVE MESSAGES ===
    TaskMoved(String, String),
    TaskReordered(String, usize),
    MoveNoop(String),
    InvalidDateKey(String),

    // === GRID MESSAGES ===
    GridHeader(String),
    HolidaysHeader,
    NoHolidays,
    InvalidMonth(String),
    InvalidDate(String),

    // === BOARD FILE MESSAGES ===
    BoardSaved,
    BoardSaveFailed(String),
    BoardLoadFailed(String),
    BoardSeeded,
    ImportCompleted(usize, String),
    ImportFailed(String),
    ExportCompleted(usize, String),
    SnapshotCompleted(String),
    SnapshotFailed(String),

    // === HOLIDAY MESSAGES ===
    HolidaysFetching(String),
    HolidaysFetched(usize),
    HolidaysFetchFailed(String),
    HolidaysDisabled,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleHolidays,
    ConfigModuleBoard,
    PromptSelectModules,
    PromptHolidaysEnabled,
    PromptHolidaysApiUrl,
    PromptDefaultLabelColor,
}
