pub mod alert_dialog;
pub mod calendar;
pub mod carousel;
pub mod data_table;
pub mod drawer;

pub use alert_dialog::{
    AlertDialog, AlertDialogAction, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogFooter, AlertDialogHeader, AlertDialogTitle,
    AlertDialogTrigger,
};
pub use calendar::Calendar;
pub use carousel::{
    Carousel, CarouselApi, CarouselContent, CarouselContext, CarouselItem, CarouselNext,
    CarouselPrevious, use_carousel,
};
pub use data_table::PaymentsTable;
pub use drawer::{
    Drawer, DrawerClose, DrawerContent, DrawerDescription, DrawerFooter, DrawerHeader,
    DrawerTitle, DrawerTrigger,
};
